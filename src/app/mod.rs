// Collaborators around the core: batch commands, the prompt session and result rendering.

pub mod batch;
pub mod prompt;
pub mod report;
