use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, error, info};
use yew::prelude::*;

use crate::config;
use crate::hooks::dom::{observe_intersections, DomHost};
use crate::tracker::{Observation, SectionList, SectionTracker};

/// Shared with the nav and any section that links elsewhere on the page.
#[derive(Clone, PartialEq)]
pub struct SectionNav {
    pub active: &'static str,
    pub navigate: Callback<&'static str>,
}

#[hook]
pub fn use_section_tracker(sections: SectionList) -> SectionNav {
    let active = use_state_eq(|| sections.first().id);
    let tracker: Rc<RefCell<SectionTracker>> = use_mut_ref(|| {
        SectionTracker::new(
            sections,
            config::SECTION_VISIBILITY_THRESHOLD,
            config::HEADER_OFFSET,
        )
    });

    {
        let tracker = tracker.clone();
        let set_active = active.setter();
        use_effect_with_deps(
            move |sections: &SectionList| {
                tracker.borrow_mut().remount();

                let anchors: Vec<_> = web_sys::window()
                    .and_then(|window| window.document())
                    .map(|document| {
                        sections
                            .iter()
                            .filter_map(|section| {
                                let anchor = document.get_element_by_id(section.id);
                                if anchor.is_none() {
                                    debug!("No anchor for section {}", section.id);
                                }
                                anchor
                            })
                            .collect()
                    })
                    .unwrap_or_default();

                let threshold = tracker.borrow().threshold();
                let observed = tracker.clone();
                let guard = observe_intersections(&anchors, threshold, move |entries, _| {
                    let reports: Vec<(String, bool, f64)> = entries
                        .iter()
                        .map(|entry| {
                            (entry.target().id(), entry.is_intersecting(), entry.intersection_ratio())
                        })
                        .collect();
                    let changed = {
                        let mut tracker = observed.borrow_mut();
                        tracker
                            .observe_all(reports.iter().map(|(id, is_intersecting, ratio)| {
                                Observation {
                                    id: id.as_str(),
                                    is_intersecting: *is_intersecting,
                                    ratio: *ratio,
                                }
                            }))
                            .then(|| tracker.active())
                    };
                    if let Some(id) = changed {
                        debug!("Active section is now {}", id);
                        set_active.set(id);
                    }
                });

                let guard = match guard {
                    Ok(guard) => {
                        info!("Tracking {} page sections", anchors.len());
                        Some(guard)
                    }
                    Err(e) => {
                        error!("Section tracking unavailable: {}", e);
                        None
                    }
                };

                move || {
                    tracker.borrow_mut().unmount();
                    drop(guard);
                }
            },
            sections,
        );
    }

    let navigate = {
        let tracker = tracker.clone();
        let set_active = active.setter();
        Callback::from(move |id: &'static str| {
            let scrolled = {
                let mut tracker = tracker.borrow_mut();
                tracker.navigate_to(id, &DomHost).map(|top| (top, tracker.active()))
            };
            match scrolled {
                Some((top, active)) => {
                    debug!("Scrolling to {} at {}", id, top);
                    set_active.set(active);
                }
                None => debug!("Ignoring navigation to missing section {}", id),
            }
        })
    };

    SectionNav {
        active: *active,
        navigate,
    }
}
