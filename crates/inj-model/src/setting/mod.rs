mod key;
pub use key::Setting;
