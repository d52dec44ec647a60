/// Units which are simply type aliases for `f32` rather than having an
/// implementation as a `uom` `Quantity`.
///
/// This may be because:
///
/// + They appear in inner loops where the arithmetic is done on bare floats
///   and the `uom` wrappers would only get in the way.
///
/// + They are stored in bulk (image voxels, system matrix weights) where we
///   still want some clues in the source as to what they represent.

pub type Lengthf32    = f32;
pub type Weightf32    = f32; // length of LOR in voxel (mm) times normalization
pub type Ratiof32     = f32;
pub type Intensityf32 = f32;
