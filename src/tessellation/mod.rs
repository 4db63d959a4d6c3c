mod resample;

pub use resample::Resample;
