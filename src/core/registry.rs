use fnv::FnvHashMap;

/// DOM event kinds the presentation layer listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Scroll,
    MouseMove,
    MouseEnter,
    MouseLeave,
    Submit,
    DomContentLoaded,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::Scroll => "scroll",
            EventKind::MouseMove => "mousemove",
            EventKind::MouseEnter => "mouseenter",
            EventKind::MouseLeave => "mouseleave",
            EventKind::Submit => "submit",
            EventKind::DomContentLoaded => "DOMContentLoaded",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerKey {
    pub target: usize,
    pub kind: EventKind,
}

/// Explicit (target, event kind) -> handlers table.
///
/// Targets are compared with `PartialEq` and interned into slots in
/// registration order; [`SubscriptionTable::drain`] hands every registration
/// back so the caller can unregister it symmetrically.
pub struct SubscriptionTable<T, H> {
    targets: Vec<T>,
    handlers: FnvHashMap<ListenerKey, Vec<H>>,
}

impl<T, H> Default for SubscriptionTable<T, H> {
    fn default() -> Self {
        Self {
            targets: Vec::new(),
            handlers: FnvHashMap::default(),
        }
    }
}

impl<T: Clone + PartialEq, H> SubscriptionTable<T, H> {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot_for(&mut self, target: &T) -> usize {
        match self.targets.iter().position(|t| t == target) {
            Some(i) => i,
            None => {
                self.targets.push(target.clone());
                self.targets.len() - 1
            }
        }
    }

    pub fn insert(&mut self, target: &T, kind: EventKind, handler: H) -> ListenerKey {
        let key = ListenerKey {
            target: self.slot_for(target),
            kind,
        };
        self.handlers.entry(key).or_default().push(handler);
        key
    }

    #[cfg(test)]
    pub fn handlers(&self, target: &T, kind: EventKind) -> &[H] {
        self.targets
            .iter()
            .position(|t| t == target)
            .and_then(|i| self.handlers.get(&ListenerKey { target: i, kind }))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[cfg(test)]
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Remove every registration, returning them grouped by target slot.
    pub fn drain(&mut self) -> Vec<(T, EventKind, H)> {
        let mut keyed: Vec<(ListenerKey, Vec<H>)> = self.handlers.drain().collect();
        keyed.sort_by_key(|(k, _)| k.target);
        let targets = std::mem::take(&mut self.targets);
        let mut out = Vec::new();
        for (key, hs) in keyed {
            let target = &targets[key.target];
            out.extend(hs.into_iter().map(|h| (target.clone(), key.kind, h)));
        }
        out
    }
}
