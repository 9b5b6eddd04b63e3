//! The three-screen app: Login → Home → Editor.

use chrono::NaiveDate;

use crate::api::NotesApi;
use crate::note::Note;
use crate::screens::editor::{EditorScreen, SubmitError};
use crate::screens::home::HomeScreen;
use crate::screens::login::{LoginError, LoginScreen};
use crate::screens::navigation::{EditorParams, Navigator, Route};

/// Owns every screen's state and keeps it in step with the route stack.
///
/// The editor state exists exactly while an editor route is on the stack.
pub struct Shell {
    nav: Navigator,
    login: LoginScreen,
    home: HomeScreen,
    editor: Option<EditorScreen>,
}

impl Shell {
    pub fn new(today: NaiveDate) -> Self {
        Shell {
            nav: Navigator::default(),
            login: LoginScreen::default(),
            home: HomeScreen::new(today),
            editor: None,
        }
    }

    pub fn route(&self) -> &Route {
        self.nav.current()
    }

    pub fn login_mut(&mut self) -> &mut LoginScreen {
        &mut self.login
    }

    pub fn home(&self) -> &HomeScreen {
        &self.home
    }

    pub fn home_mut(&mut self) -> &mut HomeScreen {
        &mut self.home
    }

    pub fn editor(&self) -> Option<&EditorScreen> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut EditorScreen> {
        self.editor.as_mut()
    }

    /// Check the login form, then show the list (which loads its notes).
    pub async fn submit_login<A: NotesApi>(&mut self, api: &A) -> Result<(), LoginError> {
        self.login.submit()?;
        self.nav.replace(Route::Home);
        self.home.on_focus(api).await;
        Ok(())
    }

    pub fn logout(&mut self) {
        self.editor = None;
        self.login = LoginScreen::default();
        self.nav = Navigator::default();
    }

    pub fn open_editor(&mut self, params: EditorParams) {
        self.editor = Some(EditorScreen::new(params.clone()));
        self.nav.navigate(Route::Editor(params));
    }

    /// Submit the open editor. On success the editor closes and the list
    /// re-fetches; on failure the editor stays open with its fields.
    pub async fn submit_editor<A: NotesApi>(&mut self, api: &A) -> Result<Note, SubmitError> {
        let editor = self.editor.as_mut().ok_or(SubmitError::NotEditing)?;
        let note = editor.submit(api).await?;
        self.go_back(api).await;
        Ok(note)
    }

    /// Leave the current screen. The list re-fetches when it regains focus.
    pub async fn go_back<A: NotesApi>(&mut self, api: &A) {
        let home_focused = matches!(self.nav.go_back(), Some(Route::Home));
        if !matches!(self.nav.current(), Route::Editor(_)) {
            self.editor = None;
        }
        if home_focused {
            self.home.on_focus(api).await;
        }
    }
}
