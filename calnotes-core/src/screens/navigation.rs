//! Screen stack.

use chrono::NaiveDate;

use crate::note::Note;

/// Parameters the editor is opened with.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorParams {
    pub selected_date: NaiveDate,
    /// Present when editing an existing note.
    pub note_to_edit: Option<Note>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Login,
    Home,
    Editor(EditorParams),
}

impl Route {
    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "Calendar Notes",
            Route::Home => "My Notes",
            Route::Editor(params) if params.note_to_edit.is_some() => "Edit Note",
            Route::Editor(_) => "Add Note",
        }
    }
}

/// A stack of routes that is never empty.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Navigator::new(Route::Login)
    }
}

impl Navigator {
    pub fn new(initial: Route) -> Self {
        Navigator {
            stack: vec![initial],
        }
    }

    pub fn current(&self) -> &Route {
        // The stack always holds at least the initial route.
        &self.stack[self.stack.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Push `route` on top of the current one.
    pub fn navigate(&mut self, route: Route) {
        self.stack.push(route);
    }

    /// Swap the current route for `route`.
    pub fn replace(&mut self, route: Route) {
        self.stack.pop();
        self.stack.push(route);
    }

    /// Pop the current route. Returns the route that regains focus, or
    /// `None` when already at the bottom of the stack.
    pub fn go_back(&mut self) -> Option<&Route> {
        if self.stack.len() <= 1 {
            return None;
        }
        self.stack.pop();
        Some(self.current())
    }
}
