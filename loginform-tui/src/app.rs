//! Login/Home shell driven by key events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{debug, info};
use loginform::prelude::*;

use crate::error::AppError;
use crate::input::TextInput;

/// What has keyboard focus on the login page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldId),
    Submit,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Self::Field(FieldId::Email) => Self::Field(FieldId::Password),
            Self::Field(FieldId::Password) => Self::Submit,
            Self::Submit => Self::Field(FieldId::Email),
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Field(FieldId::Email) => Self::Submit,
            Self::Field(FieldId::Password) => Self::Field(FieldId::Email),
            Self::Submit => Self::Field(FieldId::Password),
        }
    }
}

/// Mounted login page. Dropping it tears the form down.
#[derive(Debug)]
pub struct LoginPage {
    pub form: FormValidator,
    pub email: TextInput,
    pub password: TextInput,
    pub focus: Focus,
    /// Set when Enter was pressed while submit was disabled.
    pub rejected: bool,
}

impl LoginPage {
    fn mount(config: FormConfig, wakeup: WakeupSender) -> Result<Self, FormError> {
        debug!("Mounting login page");
        Ok(Self {
            form: FormValidator::new(config)?.with_wakeup(wakeup),
            email: TextInput::new(),
            password: TextInput::masked(),
            focus: Focus::Field(FieldId::Email),
            rejected: false,
        })
    }

    pub fn input(&self, id: FieldId) -> &TextInput {
        match id {
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
        }
    }

    fn input_mut(&mut self, id: FieldId) -> &mut TextInput {
        match id {
            FieldId::Email => &mut self.email,
            FieldId::Password => &mut self.password,
        }
    }

    fn move_focus(&mut self, to: Focus) {
        if let Focus::Field(id) = self.focus {
            self.form.blur(id);
        }
        self.focus = to;
    }

    /// Apply an edit to the focused field, dispatching a change if text moved.
    fn edit(&mut self, f: impl FnOnce(&mut TextInput) -> bool) {
        let Focus::Field(id) = self.focus else { return };
        let input = self.input_mut(id);
        if f(input) {
            let value = input.text().to_string();
            self.form.change(id, value);
        }
    }

    /// Try the submit gate. Returns the credentials on acceptance.
    fn submit(&mut self) -> Option<(String, String)> {
        let mut accepted = None;
        let result = self.form.submit(&mut |email: &str, password: &str| {
            accepted = Some((email.to_string(), password.to_string()));
        });
        self.rejected = result.is_err();
        accepted
    }
}

/// The application: session shell plus the login page while logged out.
pub struct LoginApp {
    session: Session,
    page: Option<LoginPage>,
    config: FormConfig,
    wakeup: WakeupSender,
    quit: bool,
}

impl LoginApp {
    pub fn new(session: Session, config: FormConfig, wakeup: WakeupSender) -> Result<Self, AppError> {
        let mut app = Self {
            session,
            page: None,
            config,
            wakeup,
            quit: false,
        };
        app.sync_page()?;
        Ok(app)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn page(&self) -> Option<&LoginPage> {
        self.page.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Mount or unmount the login page to match the session view.
    fn sync_page(&mut self) -> Result<(), AppError> {
        match (self.session.view(), self.page.is_some()) {
            (View::Login, false) => {
                self.page = Some(LoginPage::mount(self.config, self.wakeup.clone())?);
            }
            (View::Home, true) => {
                if let Some(page) = self.page.take() {
                    page.form.teardown();
                }
            }
            _ => {}
        }
        Ok(())
    }

    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<(), AppError> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('c' | 'q') if ctrl => self.quit = true,
            KeyCode::Char('l') if ctrl => {
                if self.session.is_authenticated() {
                    self.session.logout().await?;
                    self.sync_page()?;
                }
            }
            _ => {
                if let Some(page) = self.page.as_mut() {
                    if let Some((email, password)) = Self::page_key(page, key) {
                        self.session.login(&email, &password).await?;
                        self.sync_page()?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Keys for the login page. Returns credentials when a submit was accepted.
    fn page_key(page: &mut LoginPage, key: KeyEvent) -> Option<(String, String)> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return None;
        }
        match key.code {
            KeyCode::Tab | KeyCode::Down => page.move_focus(page.focus.next()),
            KeyCode::BackTab | KeyCode::Up => page.move_focus(page.focus.prev()),
            KeyCode::Enter => {
                let accepted = page.submit();
                if accepted.is_some() {
                    info!("Login accepted");
                }
                return accepted;
            }
            KeyCode::Char(c) => page.edit(|input| {
                input.insert(c);
                true
            }),
            KeyCode::Backspace => page.edit(TextInput::backspace),
            KeyCode::Delete => page.edit(TextInput::delete),
            KeyCode::Left => page.edit(|input| {
                input.move_left();
                false
            }),
            KeyCode::Right => page.edit(|input| {
                input.move_right();
                false
            }),
            KeyCode::Home => page.edit(|input| {
                input.move_home();
                false
            }),
            KeyCode::End => page.edit(|input| {
                input.move_end();
                false
            }),
            _ => {}
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use loginform::session::{LOGIN_KEY, PersistenceStore};
    use loginform::wakeup;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    async fn type_str(app: &mut LoginApp, s: &str) {
        for c in s.chars() {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
    }

    async fn app_with(store: MemoryStore) -> LoginApp {
        let session = Session::restore(store).await.unwrap();
        let (tx, _rx) = wakeup::channel();
        LoginApp::new(session, FormConfig::default(), tx).unwrap()
    }

    async fn quiet() {
        tokio::time::sleep(Duration::from_millis(1001)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_flow_persists_flag() {
        let store = MemoryStore::new();
        let mut app = app_with(store.clone()).await;
        assert_eq!(app.session().view(), View::Login);

        type_str(&mut app, "ada@example.com").await;
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        type_str(&mut app, "longenough").await;

        // Submit is disabled until the quiet period ends.
        app.handle_key(key(KeyCode::Enter)).await.unwrap();
        assert!(app.page().is_some_and(|p| p.rejected));
        assert!(!app.session().is_authenticated());

        quiet().await;
        app.handle_key(key(KeyCode::Enter)).await.unwrap();
        assert!(app.session().is_authenticated());
        assert!(app.page().is_none());
        assert_eq!(store.get(LOGIN_KEY).await.unwrap().as_deref(), Some("true"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_tab_blurs_field() {
        let mut app = app_with(MemoryStore::new()).await;
        type_str(&mut app, "noatsign").await;
        app.handle_key(key(KeyCode::Tab)).await.unwrap();

        let page = app.page().unwrap();
        assert_eq!(page.focus, Focus::Field(FieldId::Password));
        assert_eq!(page.form.email().value(), "noatsign");
        assert!(!page.form.email().is_valid());
        assert!(page.form.password().is_valid());
    }

    #[tokio::test(start_paused = true)]
    async fn test_editing_keys_update_form_value() {
        let mut app = app_with(MemoryStore::new()).await;
        type_str(&mut app, "ab.com").await;
        app.handle_key(key(KeyCode::Home)).await.unwrap();
        app.handle_key(key(KeyCode::Right)).await.unwrap();
        type_str(&mut app, "@").await;
        app.handle_key(key(KeyCode::End)).await.unwrap();
        app.handle_key(key(KeyCode::Backspace)).await.unwrap();

        let page = app.page().unwrap();
        assert_eq!(page.form.email().value(), "a@b.co");
        assert_eq!(page.email.text(), "a@b.co");
    }

    #[tokio::test(start_paused = true)]
    async fn test_restored_session_shows_home_and_logs_out() {
        let store = MemoryStore::new();
        store.set(LOGIN_KEY, "true").await.unwrap();
        let mut app = app_with(store.clone()).await;
        assert_eq!(app.session().view(), View::Home);
        assert!(app.page().is_none());

        app.handle_key(ctrl('l')).await.unwrap();
        assert_eq!(app.session().view(), View::Login);
        let page = app.page().unwrap();
        assert!(!page.form.submit_enabled());
        assert_eq!(page.form.email().value(), "");
        assert_eq!(store.get(LOGIN_KEY).await.unwrap().as_deref(), Some("false"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit_keys() {
        let mut app = app_with(MemoryStore::new()).await;
        app.handle_key(ctrl('q')).await.unwrap();
        assert!(app.should_quit());

        let mut app = app_with(MemoryStore::new()).await;
        app.handle_key(key(KeyCode::Esc)).await.unwrap();
        assert!(app.should_quit());
    }
}
