pub mod resolve;
pub mod source;

pub use resolve::{EffectiveAnnotations, resolve_value};
pub use source::AnnotationSource;

pub mod prelude {
    pub use crate::resolve::{EffectiveAnnotations, resolve_value};
    pub use crate::source::AnnotationSource;
}
