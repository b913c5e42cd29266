mod domain;
pub use domain::constants;
pub use domain::{Annotations, InjectDirective};

mod error;
pub use error::{ModelError, ModelResult};

mod kind;
pub use kind::Runtime;

mod setting;
pub use setting::Setting;
