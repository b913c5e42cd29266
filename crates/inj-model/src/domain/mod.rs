mod annotations;
pub use annotations::Annotations;

mod directive;
pub use directive::InjectDirective;

pub mod constants;
