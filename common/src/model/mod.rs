pub mod regulation;
pub mod staff;

use crate::model::regulation::RegulationSection;
use crate::model::staff::StaffRecord;

/// A successfully classified document.
///
/// Exactly one variant is ever active; loading a new file replaces the whole
/// value. The variant is decided once, at load time, by
/// [`crate::load::classify`] — nothing downstream re-probes the shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    /// Ordered staff directory (`ead_staff.json` family).
    Staff(Vec<StaffRecord>),
    /// The first (and only edited) section of a regulation/download file.
    Regulation(RegulationSection),
}
