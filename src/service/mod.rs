//! Orchestration over the pure core: one snapshot of repository state
//! (branch + remote) pushed through all three transformations, and a
//! last-known-state watcher that broadcasts changes to subscribers.

use crate::core;
use crate::db::Settings;
use crate::views::StatusView;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Resolution {
    pub branch: Option<String>,
    pub captured_groups: Option<Vec<String>>,
    pub issue_key: Option<String>,
    pub issue_url: Option<String>,
    pub branch_url: Option<String>,
}

impl Resolution {
    /// Runs one branch/remote snapshot through the core. Pure given its
    /// inputs; all git and settings I/O happens before this call.
    pub fn resolve(branch: Option<&str>, remote_url: Option<&str>, settings: &Settings) -> Self {
        let Some(branch) = branch else {
            return Self::default();
        };

        let captured_groups = core::extract(branch, &settings.branch_pattern);
        let issue_key = captured_groups
            .as_ref()
            .and_then(|groups| groups.first())
            .filter(|key| !key.is_empty())
            .cloned();
        let issue_url = captured_groups.as_ref().and_then(|groups| {
            core::compose(&settings.host_url, &settings.path_pattern, groups)
        });
        let branch_url = remote_url.and_then(|remote| core::build_branch_url(remote, branch));

        Self {
            branch: Some(branch.to_string()),
            captured_groups,
            issue_key,
            issue_url,
            branch_url,
        }
    }

    pub fn to_view(&self) -> StatusView {
        StatusView {
            branch: self.branch.clone(),
            issue_key: self.issue_key.clone(),
            captured_groups: self.captured_groups.clone().unwrap_or_default(),
            issue_url: self.issue_url.clone(),
            branch_url: self.branch_url.clone(),
        }
    }
}

type Subscriber<'a> = Box<dyn FnMut(&Resolution) + 'a>;

/// Holds the last-known resolution and tells subscribers when it changed.
/// The core stays stateless; all "current issue" state lives here.
#[derive(Default)]
pub struct LinkWatcher<'a> {
    last: Option<Resolution>,
    subscribers: Vec<Subscriber<'a>>,
}

impl<'a> LinkWatcher<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&Resolution) + 'a) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn last(&self) -> Option<&Resolution> {
        self.last.as_ref()
    }

    /// Feeds a fresh snapshot in. Subscribers run only when the resolution
    /// differs from the last-known one; returns whether it did.
    pub fn observe(
        &mut self,
        branch: Option<&str>,
        remote_url: Option<&str>,
        settings: &Settings,
    ) -> bool {
        let next = Resolution::resolve(branch, remote_url, settings);
        if self.last.as_ref() == Some(&next) {
            return false;
        }
        for subscriber in &mut self.subscribers {
            subscriber(&next);
        }
        self.last = Some(next);
        true
    }
}
