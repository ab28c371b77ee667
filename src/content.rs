//! Static egg content: one record per slot on the ring.
//!
//! The table is fixed at startup and never mutated. The binary takes a
//! prefix of it when started with fewer eggs, so everything downstream
//! works on a slice rather than the full table.

/// One egg's shell color and caption copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EggRecord {
    /// Shell color, RGB in [0, 1].
    pub color: [f32; 3],
    pub title: &'static str,
    /// Optional flavor line shown above the task.
    pub story: Option<&'static str>,
    /// The task revealed when the egg cracks.
    pub task: &'static str,
}

/// The full ring, in slot order.
pub const EGGS: &[EggRecord] = &[
    EggRecord {
        color: [0.93, 0.47, 0.58],
        title: "Rose Quartz",
        story: Some("The first egg painted every spring."),
        task: "Hop three times and name your favorite flower.",
    },
    EggRecord {
        color: [0.98, 0.78, 0.35],
        title: "Marigold",
        story: None,
        task: "Swap a joke with the hunter on your left.",
    },
    EggRecord {
        color: [0.55, 0.80, 0.45],
        title: "Clover",
        story: Some("Found once in a four-leaf patch."),
        task: "Hide another egg while nobody is watching.",
    },
    EggRecord {
        color: [0.36, 0.67, 0.88],
        title: "Robin",
        story: Some("A borrowed shade from the morning sky."),
        task: "Whistle the first birdsong you can remember.",
    },
    EggRecord {
        color: [0.63, 0.50, 0.86],
        title: "Lavender",
        story: None,
        task: "Trade baskets with the player across from you.",
    },
    EggRecord {
        color: [0.96, 0.60, 0.32],
        title: "Apricot",
        story: Some("Warmed all week on the south windowsill."),
        task: "Carry the egg spoon for ten careful steps.",
    },
    EggRecord {
        color: [0.40, 0.78, 0.72],
        title: "Seafoam",
        story: None,
        task: "Tell the story of your best hiding spot.",
    },
    EggRecord {
        color: [0.85, 0.42, 0.74],
        title: "Foxglove",
        story: Some("Striped by a very careful brush."),
        task: "Draw a zigzag on the next egg you find.",
    },
];

/// Caption projection: the record behind a selection, if any.
///
/// Total over its inputs; a stale out-of-range index projects to `None`
/// instead of panicking.
pub fn caption_for(eggs: &[EggRecord], selected: Option<usize>) -> Option<&EggRecord> {
    selected.and_then(|i| eggs.get(i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_a_full_ring() {
        assert_eq!(EGGS.len(), 8);
    }

    #[test]
    fn every_record_is_presentable() {
        for rec in EGGS {
            assert!(!rec.title.is_empty());
            assert!(!rec.task.is_empty());
            if let Some(story) = rec.story {
                assert!(!story.is_empty());
            }
            for c in rec.color {
                assert!((0.0..=1.0).contains(&c));
            }
        }
    }

    #[test]
    fn shell_colors_are_distinct() {
        for (i, a) in EGGS.iter().enumerate() {
            for b in &EGGS[i + 1..] {
                assert_ne!(a.color, b.color);
            }
        }
    }

    #[test]
    fn caption_projects_the_selection() {
        assert!(caption_for(EGGS, None).is_none());
        let rec = caption_for(EGGS, Some(2)).unwrap();
        assert_eq!(rec.title, EGGS[2].title);
    }

    #[test]
    fn caption_survives_a_stale_index() {
        let short = &EGGS[..3];
        assert!(caption_for(short, Some(7)).is_none());
        assert!(caption_for(&[], Some(0)).is_none());
    }
}
