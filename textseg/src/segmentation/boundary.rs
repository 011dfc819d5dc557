//! Cut-point helpers shared by the segmentation strategies: backward scans
//! for sentence terminators and whole-unit overlap carry-over.

/// Scan backward through `chars[search_start..end]` for the latest sentence
/// terminator (`.`, `!` or `?` followed by a space, or by a line break when
/// `allow_newline` is set) and return the char index just past it.
pub(crate) fn rscan_sentence_end(
    chars: &[char],
    search_start: usize,
    end: usize,
    allow_newline: bool,
) -> Option<usize> {
    if end < 2 {
        return None;
    }
    for i in (search_start..=end - 2).rev() {
        if matches!(chars[i], '.' | '!' | '?') {
            let next = chars[i + 1];
            if next == ' ' || (allow_newline && next == '\n') {
                return Some(i + 2);
            }
        }
    }
    None
}

/// Walk backward through the units already placed in a closed chunk and
/// collect the trailing group whose cumulative character length stays within
/// `overlap`. Returns the carried units in original order with their total
/// size. Units are never split to satisfy the overlap.
pub(crate) fn carry_overlap(units: &[String], overlap: usize) -> (Vec<String>, usize) {
    let mut carried = Vec::new();
    let mut carried_size = 0usize;
    for unit in units.iter().rev() {
        let unit_size = unit.chars().count();
        if carried_size + unit_size > overlap {
            break;
        }
        carried.push(unit.clone());
        carried_size += unit_size;
    }
    carried.reverse();
    (carried, carried_size)
}

/// Greedily pack `units` into chunks bounded by `target`, carrying back up to
/// `overlap` worth of trailing whole units into each new chunk. A single unit
/// larger than `target` becomes its own oversized chunk.
pub(crate) fn accumulate_units(
    units: Vec<String>,
    separator: &str,
    target: usize,
    overlap: usize,
) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut current_size = 0usize;

    for unit in units {
        let unit_size = unit.chars().count();

        if current_size + unit_size > target && !current.is_empty() {
            chunks.push(current.join(separator));

            if overlap > 0 {
                let (carried, carried_size) = carry_overlap(&current, overlap);
                current = carried;
                current_size = carried_size;
            } else {
                current.clear();
                current_size = 0;
            }
        }

        current.push(unit);
        current_size += unit_size;
    }

    if !current.is_empty() {
        chunks.push(current.join(separator));
    }

    chunks
}
