//! Configuration section definitions.
//!
//! Each module corresponds to a section in `blog.toml`:
//!
//! | Module    | TOML Section  | Purpose                                  |
//! |-----------|---------------|------------------------------------------|
//! | `build`   | `[build]`     | Export mode, output and theme paths      |
//! | `headers` | `[headers]`   | CORS response headers                    |
//! | `images`  | `[images]`    | Remote image hosts and formats           |
//! | `locale`  | `[locale]`    | Language prefix convention               |
//! | `routes`  | `[routes]`    | Feed redirect, `.html` rewrite, exclusions |
//! | `site`    | `[site]`      | Default language, site identifiers, theme |

mod build;
mod headers;
mod images;
mod locale;
mod routes;
mod site;

pub use build::BuildSectionConfig;
pub use headers::HeadersConfig;
pub use images::ImagesConfig;
pub use locale::{ConventionKind, LocaleSectionConfig};
pub use routes::RoutesConfig;
pub use site::SiteSectionConfig;
