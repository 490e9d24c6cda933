mod profile_patch;

pub use profile_patch::ProfilePatch;
