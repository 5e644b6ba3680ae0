pub mod interpolator;
pub mod personalizer;
pub mod templates;

pub use interpolator::interpolate;
pub use personalizer::{build_context, personalize_prompt};
pub use templates::{find_template, CATALOG};
