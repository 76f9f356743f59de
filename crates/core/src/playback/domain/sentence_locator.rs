use crate::transcript::domain::caption_entry::CaptionEntry;

/// Maps a playhead time onto the entry whose interval contains it.
pub struct SentenceLocator;

impl SentenceLocator {
    /// Index of the first entry with `start_time <= t <= end_time`.
    ///
    /// Both bounds are inclusive, so when two intervals touch the earlier
    /// entry wins. Returns `None` in gaps, before the first entry and after
    /// the last one.
    pub fn locate(t: f64, entries: &[CaptionEntry]) -> Option<usize> {
        entries.iter().position(|entry| entry.contains(t))
    }

    /// Whether playback should auto-stop at the end of `sentence`.
    ///
    /// Fires once the playhead is within `tolerance` seconds of the
    /// sentence end so the pause lands before the next sentence starts.
    pub fn should_pause(t: f64, sentence: &CaptionEntry, tolerance: f64) -> bool {
        t >= sentence.end_time - tolerance
    }
}

/// A sentence index held stable across time ticks.
///
/// Dictation and shadowing practise one sentence at a time, so the
/// highlighted sentence must not jump to "none" whenever the playhead
/// drifts into a gap. The pin only moves on explicit navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentencePin {
    index: usize,
}

impl SentencePin {
    /// Initializes from the live locator result, or the first sentence when
    /// the playhead is not inside any interval.
    pub fn from_playhead(t: f64, entries: &[CaptionEntry]) -> Self {
        Self {
            index: SentenceLocator::locate(t, entries).unwrap_or(0),
        }
    }

    pub fn at(index: usize) -> Self {
        Self { index }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The pinned entry, `None` for an empty sequence.
    pub fn sentence<'a>(&self, entries: &'a [CaptionEntry]) -> Option<&'a CaptionEntry> {
        entries.get(self.index)
    }

    /// Moves forward one sentence. Returns `false` at the last sentence.
    pub fn advance(&mut self, len: usize) -> bool {
        if self.index + 1 >= len {
            return false;
        }
        self.index += 1;
        true
    }

    /// Moves back one sentence. Returns `false` at the first sentence.
    pub fn retreat(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Pins `index` if it names an entry. Returns whether the pin moved.
    pub fn move_to(&mut self, index: usize, len: usize) -> bool {
        if index >= len {
            return false;
        }
        self.index = index;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn entries() -> Vec<CaptionEntry> {
        vec![
            CaptionEntry::new(1, 0.0, 5.0, "one"),
            CaptionEntry::new(2, 5.0, 10.0, "two"),
            CaptionEntry::new(3, 12.0, 15.0, "three"),
        ]
    }

    #[rstest]
    #[case::start_of_first(0.0, Some(0))]
    #[case::inside_first(2.5, Some(0))]
    #[case::touching_boundary_first_wins(5.0, Some(0))]
    #[case::just_after_boundary(5.001, Some(1))]
    #[case::end_of_second(10.0, Some(1))]
    #[case::gap(11.0, None)]
    #[case::end_of_last(15.0, Some(2))]
    #[case::after_last(15.5, None)]
    #[case::before_first(-1.0, None)]
    fn test_locate(#[case] t: f64, #[case] expected: Option<usize>) {
        assert_eq!(SentenceLocator::locate(t, &entries()), expected);
    }

    #[test]
    fn test_locate_empty_sequence() {
        assert_eq!(SentenceLocator::locate(1.0, &[]), None);
    }

    #[rstest]
    #[case::well_before_end(4.0, false)]
    #[case::inside_tolerance(4.91, true)]
    #[case::at_end(5.0, true)]
    #[case::past_end(7.0, true)]
    fn test_should_pause(#[case] t: f64, #[case] expected: bool) {
        let sentence = CaptionEntry::new(1, 0.0, 5.0, "one");
        assert_eq!(SentenceLocator::should_pause(t, &sentence, 0.1), expected);
    }

    #[test]
    fn test_pin_from_playhead_inside_interval() {
        assert_eq!(SentencePin::from_playhead(13.0, &entries()).index(), 2);
    }

    #[test]
    fn test_pin_from_playhead_in_gap_falls_back_to_first() {
        assert_eq!(SentencePin::from_playhead(11.0, &entries()).index(), 0);
    }

    #[test]
    fn test_pin_advance_stops_at_last() {
        let mut pin = SentencePin::at(1);
        assert!(pin.advance(3));
        assert!(!pin.advance(3));
        assert_eq!(pin.index(), 2);
    }

    #[test]
    fn test_pin_retreat_stops_at_first() {
        let mut pin = SentencePin::at(1);
        assert!(pin.retreat());
        assert!(!pin.retreat());
        assert_eq!(pin.index(), 0);
    }

    #[test]
    fn test_pin_move_to_rejects_out_of_range() {
        let mut pin = SentencePin::at(0);
        assert!(!pin.move_to(3, 3));
        assert!(pin.move_to(2, 3));
        assert_eq!(pin.index(), 2);
    }

    #[test]
    fn test_pin_sentence_on_empty_sequence() {
        assert!(SentencePin::at(0).sentence(&[]).is_none());
    }
}
