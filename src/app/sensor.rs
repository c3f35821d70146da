use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::{
    config::SiteConfig,
    section::{ActiveSection, SectionId},
    visibility::{Transition, VisibilitySensor},
};

/// Wire a section's region to the active-section register.
///
/// Returns the ref to attach to the `<section>` and a signal that follows the
/// region's visibility, for entrance animations. Each time the region becomes
/// visible the register is set to `id`.
pub fn use_section(id: SectionId) -> (NodeRef<html::Section>, Signal<bool>) {
    let active = expect_context::<ActiveSection>();
    let threshold = expect_context::<SiteConfig>().visibility_threshold();

    let node_ref = NodeRef::<html::Section>::new();
    let sensor = StoredValue::new(VisibilitySensor::new(threshold));
    let visible = RwSignal::new(false);

    let _ = use_intersection_observer_with_options(
        node_ref,
        move |entries, _| {
            for entry in entries {
                let transition = sensor
                    .try_update_value(|s| {
                        s.report(
                            entry.is_intersecting(),
                            entry.intersection_ratio(),
                            id,
                            active,
                        )
                    })
                    .flatten();
                match transition {
                    Some(Transition::Entered) => visible.set(true),
                    Some(Transition::Exited) => visible.set(false),
                    None => {}
                }
            }
        },
        // 0.0 so a region leaving entirely is always reported
        UseIntersectionObserverOptions::default().thresholds(vec![0.0, threshold]),
    );

    (node_ref, visible.into())
}
