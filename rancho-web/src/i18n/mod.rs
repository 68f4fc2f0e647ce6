mod bundle;
mod locales;
mod render;

pub use bundle::{I18nBundle, current_lang, set_lang};
pub use locales::{DEFAULT_LANG, LocaleMeta, locales};
pub use render::{t, tr, tr_count};
