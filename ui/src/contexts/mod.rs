pub mod loading;

pub use loading::{LoadingHandle, LoadingProvider, use_loading};
