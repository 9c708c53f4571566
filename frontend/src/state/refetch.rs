use leptos::*;

/// Revision counter a list container bumps to reload its collection.
///
/// Rows receive a copy; the container's resource keys on [`Refetch::revision`]
/// and hands every delivery back tagged with the revision that produced it.
#[derive(Clone, Copy)]
pub struct Refetch {
    revision: RwSignal<u32>,
}

impl Refetch {
    pub fn new() -> Self {
        Self {
            revision: create_rw_signal(0),
        }
    }

    /// Tracked read for resource sources.
    pub fn revision(&self) -> u32 {
        self.revision.get()
    }

    /// Revision the next [`Refetch::trigger`] will produce.
    pub fn upcoming(&self) -> u32 {
        self.revision.get_untracked().wrapping_add(1)
    }

    pub fn trigger(&self) -> u32 {
        let next = self.upcoming();
        // The owning container may already be gone.
        let _ = self.revision.try_set(next);
        next
    }
}

impl Default for Refetch {
    fn default() -> Self {
        Self::new()
    }
}

/// Latest successful value read from `source`.
///
/// An `Err` delivery leaves the previous `Ok` value in place, so a failed
/// reload keeps showing the rows that were already on screen.
pub fn retain_last_ok<T, E>(source: impl Fn() -> Option<Result<T, E>> + 'static) -> Memo<Option<T>>
where
    T: Clone + PartialEq + 'static,
{
    create_memo(move |previous: Option<&Option<T>>| match source() {
        Some(Ok(value)) => Some(value),
        _ => previous.cloned().flatten(),
    })
}
