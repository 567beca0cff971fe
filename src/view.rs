use crate::config::CarouselConfig;
use crate::layout;
use crate::track::Track;

/// Shadow treatment for a slot: the centered card is raised, neighbors flat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Elevation {
    Raised,
    Flat,
}

/// Per-slot visual frame handed to the rendering layer. `x` is the absolute
/// left edge of the card after the strip translation; the centered slot lands
/// at `viewport/2 - width/2`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SlotFrame {
    pub slot: usize,
    pub item_index: usize,
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub transitions_enabled: bool,
    pub elevation: Elevation,
}

/// Read-only projection of carousel state into renderable frames. Pure; the
/// engine calls this after every mutation, the host after every paint signal.
pub fn project(
    track: &Track,
    cfg: &CarouselConfig,
    viewport_width: f64,
    center: usize,
    transitions_enabled: bool,
) -> Vec<SlotFrame> {
    if track.is_empty() {
        return Vec::new();
    }
    let width = layout::card_width(cfg, viewport_width);
    let strip = layout::x_offset(cfg, center, width, viewport_width);
    track
        .slots()
        .map(|(slot, item_index, _)| SlotFrame {
            slot,
            item_index,
            width,
            height: layout::card_height(cfg, slot.abs_diff(center), viewport_width),
            x: strip + slot as f64 * (width + cfg.gap_px),
            transitions_enabled,
            elevation: if slot == center {
                Elevation::Raised
            } else {
                Elevation::Flat
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::Item;

    fn items(n: u64) -> Vec<Item> {
        (0..n)
            .map(|i| Item {
                id: i,
                image_ref: format!("img/{i}.jpg"),
                alt_text: format!("item {i}"),
            })
            .collect()
    }

    #[test]
    fn center_slot_is_raised_and_centered() {
        let track = Track::build(&items(5));
        let cfg = CarouselConfig::default();
        let frames = project(&track, &cfg, 1200.0, 5, true);
        assert_eq!(frames.len(), 15);

        let center = &frames[5];
        assert_eq!(center.elevation, Elevation::Raised);
        assert_eq!(center.height, 420.0);
        assert_eq!(center.x, 1200.0 / 2.0 - center.width / 2.0);
        assert!(
            frames
                .iter()
                .filter(|f| f.slot != 5)
                .all(|f| f.elevation == Elevation::Flat)
        );
    }

    #[test]
    fn heights_follow_the_pyramid() {
        let track = Track::build(&items(5));
        let cfg = CarouselConfig::default();
        let frames = project(&track, &cfg, 1200.0, 7, true);
        assert_eq!(frames[7].height, 420.0);
        assert_eq!(frames[6].height, 360.0);
        assert_eq!(frames[8].height, 360.0);
        assert_eq!(frames[5].height, 310.0);
        assert_eq!(frames[9].height, 310.0);
        assert_eq!(frames[0].height, 310.0);
    }

    #[test]
    fn empty_track_projects_nothing() {
        let track = Track::build(&[]);
        let cfg = CarouselConfig::default();
        assert!(project(&track, &cfg, 1200.0, 0, true).is_empty());
    }

    #[test]
    fn slots_are_one_card_plus_gap_apart() {
        let track = Track::build(&items(3));
        let cfg = CarouselConfig::default();
        let frames = project(&track, &cfg, 1200.0, 3, true);
        for pair in frames.windows(2) {
            let step = pair[1].x - pair[0].x;
            assert_eq!(step, pair[0].width + cfg.gap_px);
        }
    }
}
