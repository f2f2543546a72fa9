pub mod wizard;

pub use wizard::UploadWizard;
