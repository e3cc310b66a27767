//! Shipped technology-constraint texts.
//!
//! The Next.js text carries the full mandatory stack contract; the others
//! are single constraints layered on top of it by the bundled profiles.

use crate::component::TechConstraint;
use crate::store::{Audience, PromptStore};

/// Build the shipped tech-constraint store.
pub fn store() -> PromptStore<TechConstraint> {
    let mut store = PromptStore::new();

    store.register(Audience::Frontend, TechConstraint::Nextjs, NEXTJS);
    store.register(Audience::Frontend, TechConstraint::React, REACT);
    store.register(Audience::Frontend, TechConstraint::Tailwind, TAILWIND);
    store.register(Audience::Frontend, TechConstraint::Typescript, TYPESCRIPT);
    store.register(Audience::Frontend, TechConstraint::Storybook, STORYBOOK);

    store
}

const NEXTJS: &str = r#"
### Technical Stack (MANDATORY — NO EXCEPTIONS)

* **Framework**: `Next.js` using **App Router only**
* **Language**: `TypeScript` only
* **Components**: **React functional components** only
* **Styling**: Use **CSS Modules**, **TailwindCSS**, or **Styled Components** consistently
* **HTTP Client**: `axios` only — **`fetch` is strictly forbidden**
* **State Management**: Only **Zustand** or **Redux Toolkit**
* **Project Structure**: Must follow the `/app` folder convention of Next.js App Router

---

Backend Integration Requirements
* Only use endpoints and payloads defined in UI/api_contract.md.
* No endpoint guessing, response inferring, or structure altering allowed.
* Use TypeScript interfaces to type-check all API inputs/outputs.
* Implement a centralized api service module (e.g. /services/api.ts) that wraps axios and enforces exact schema usage.
Every request must:
* Use the exact JSON schema as defined (no fields missing or added)
* Validate payloads before sending using type-safe helpers (e.g. Zod, Yup, or custom validators if needed)
Reject any response that does not conform to expected schema (log, throw, or handle)
* Required states: loading, error, success, empty, disabled
* Polling or real-time updates only if specified in the contract

---

### Project Requirements

* Must run out-of-the-box with:

```bash
npm install
npm run dev
```

* Required files:

```
package.json
tsconfig.json
next.config.js
.env.example
```

* Use **strict TypeScript typing** — absolutely **no `any`**
* Organize code in a modular structure:

```
/app
/components
/lib
/store
/services
/types
```

---

### Functionality & State Management

* Use **Zustand** or **Redux Toolkit** to centralize state
* Every feature must:

* Manage `loading`, `error`, `data`, and `UI toggles` in state
* Handle **optimistic updates** with rollback
* Wire all form inputs directly to backend logic
* Ensure state and API results are in full sync with the contract
"#;

const REACT: &str = r#"
Use **React functional components** with hooks exclusively; class components are forbidden.
Follow current React conventions for props, state, and effects throughout.
"#;

const TAILWIND: &str = r#"
Style exclusively with **TailwindCSS** utility classes; do not emit separate stylesheet files.
Keep class lists ordered and deduplicated, extracting repeated patterns into shared components.
"#;

const TYPESCRIPT: &str = r#"
Write **TypeScript only**, with strict typing and absolutely no `any`.
Every prop, parameter, and return value carries an explicit type or a precisely inferred one.
"#;

const STORYBOOK: &str = r#"
Provide **Storybook stories** for every component, covering each meaningful prop combination and state.
Stories must run against the real components with no mocked internals.
"#;
