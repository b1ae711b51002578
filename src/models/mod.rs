pub mod enums;
pub mod measurement;
pub mod profile;
pub mod record;
pub mod vitals;

pub use enums::{BmiCategory, InvalidEnum, OverallHealth, Sex, SourceFormat, Specialist};
pub use measurement::{LabTest, Measurements};
pub use profile::Profile;
pub use record::PatientRecord;
pub use vitals::Vitals;
