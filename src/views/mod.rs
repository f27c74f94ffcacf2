// Views

pub mod wizard;

pub use wizard::WizardView;
