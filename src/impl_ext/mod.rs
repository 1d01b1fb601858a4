// Crate-internal.
// ---

pub(crate) mod scheduler {
    pub(crate) mod daily_summary;
}
pub(crate) mod standard_sinks {
    pub(crate) mod recording_sink;
}

// Public exports.
// ---

pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod scheduler {
        pub use crate::impl_ext::scheduler::daily_summary::next_run_after;
    }

    pub mod standard_sinks {
        pub use crate::impl_ext::standard_sinks::recording_sink::*;
    }
}
