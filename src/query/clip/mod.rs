pub use self::clip_segment_halfspace::clip_segment_halfspace;

mod clip_segment_halfspace;
