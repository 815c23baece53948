/// Cascading selection state. The workspace level only exists inside a
/// region selection, so the dangling state (workspace set, region unset)
/// cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Index,
    Region {
        region: String,
    },
    Workspace {
        region: String,
        workspace: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    Applied,
    Rejected,
}

impl SelectionOutcome {
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

impl Selection {
    pub fn selected_region(&self) -> Option<&str> {
        match self {
            Self::Index => None,
            Self::Region { region } | Self::Workspace { region, .. } => Some(region),
        }
    }

    pub fn selected_workspace(&self) -> Option<&str> {
        match self {
            Self::Workspace { workspace, .. } => Some(workspace),
            _ => None,
        }
    }

    /// Selecting (or deselecting) a region always clears the workspace
    /// level, even when the region id is unchanged. Returns whether a
    /// workspace selection was dropped by the cascade.
    pub fn select_region(&mut self, region: Option<&str>) -> bool {
        let cleared = matches!(self, Self::Workspace { .. });
        *self = match region {
            Some(region) => Self::Region {
                region: region.to_string(),
            },
            None => Self::Index,
        };
        cleared
    }

    /// Rejected while no region is selected; the caller picked a workspace
    /// before a region, which must not corrupt committed state.
    pub fn select_workspace(&mut self, workspace: Option<&str>) -> SelectionOutcome {
        let region = match self {
            Self::Index => return SelectionOutcome::Rejected,
            Self::Region { region } | Self::Workspace { region, .. } => region.clone(),
        };
        *self = match workspace {
            Some(workspace) => Self::Workspace {
                region,
                workspace: workspace.to_string(),
            },
            None => Self::Region { region },
        };
        SelectionOutcome::Applied
    }
}
