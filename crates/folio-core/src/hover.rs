/// Result of a pointer transition that changed the hovered project.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoverChange {
    pub project: Option<usize>,
}

/// Tracks which cubelet is under the pointer and which project it hosts.
///
/// The last enter wins; a leave only clears the hover when it concerns the
/// cell currently hovered, so an enter on B followed by a late leave from A
/// keeps B active.
#[derive(Clone, Debug, Default)]
pub struct HoverTracker {
    cell: Option<usize>,
    project: Option<usize>,
}

impl HoverTracker {
    pub fn hovered_cell(&self) -> Option<usize> {
        self.cell
    }

    pub fn hovered_project(&self) -> Option<usize> {
        self.project
    }

    pub fn enter(&mut self, cell: usize, project: Option<usize>) -> Option<HoverChange> {
        self.cell = Some(cell);
        self.set_project(project)
    }

    pub fn leave(&mut self, cell: usize) -> Option<HoverChange> {
        if self.cell != Some(cell) {
            return None;
        }
        self.cell = None;
        self.set_project(None)
    }

    /// Translate a new pick result into leave/enter transitions.
    pub fn update_pick(
        &mut self,
        picked: Option<usize>,
        project_of: impl Fn(usize) -> Option<usize>,
    ) -> Option<HoverChange> {
        if picked == self.cell {
            return None;
        }
        let mut change = None;
        if let Some(prev) = self.cell {
            change = self.leave(prev).or(change);
        }
        if let Some(next) = picked {
            change = self.enter(next, project_of(next)).or(change);
        }
        change
    }

    fn set_project(&mut self, project: Option<usize>) -> Option<HoverChange> {
        if self.project == project {
            return None;
        }
        self.project = project;
        Some(HoverChange { project })
    }
}
