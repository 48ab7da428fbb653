//! Observable theme state
//!
//! The current theme is a single value published through a `watch` channel.
//! Screens take a [`ThemeContext`] explicitly or subscribe for replacements;
//! nothing reads a global. Updates replace the whole context.

use crate::resolver::ThemeResolver;
use crate::theme::{Color, ColorRole, Mode, Style, StyleKey, StyleSheet, Theme};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use tracing::{debug, error};

/// What a screen needs to render: the theme and its derived styles
#[derive(Debug, Clone)]
pub struct ThemeContext {
    theme: Arc<Theme>,
    styles: Arc<StyleSheet>,
}

impl ThemeContext {
    pub fn new(theme: Arc<Theme>) -> Self {
        let styles = Arc::new(StyleSheet::for_theme(&theme));
        Self { theme, styles }
    }

    pub fn theme(&self) -> &Arc<Theme> {
        &self.theme
    }

    pub fn styles(&self) -> &StyleSheet {
        &self.styles
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    pub fn mode(&self) -> Mode {
        self.theme.mode()
    }

    pub fn color(&self, role: ColorRole) -> Color {
        self.theme.color(role)
    }

    pub fn style(&self, key: StyleKey) -> &Style {
        self.styles.get(key)
    }
}

pub struct ThemeState {
    tx: watch::Sender<ThemeContext>,
}

impl ThemeState {
    pub fn new(theme: Arc<Theme>) -> Self {
        let (tx, _rx) = watch::channel(ThemeContext::new(theme));
        Self { tx }
    }

    pub fn current(&self) -> ThemeContext {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ThemeContext> {
        self.tx.subscribe()
    }

    /// Publish a new theme, returning the context subscribers will see
    pub fn replace(&self, theme: Arc<Theme>) -> ThemeContext {
        let ctx = ThemeContext::new(theme);
        self.tx.send_replace(ctx.clone());
        ctx
    }

    /// Publish `theme` unless `skip` says otherwise. `skip` runs under the
    /// channel's write lock, so no other replacement lands between the check
    /// and the publish. Returns `None` when nothing was published.
    pub fn replace_unless(
        &self,
        theme: Arc<Theme>,
        skip: impl FnOnce() -> bool,
    ) -> Option<ThemeContext> {
        let mut published = None;
        self.tx.send_if_modified(|ctx| {
            if skip() {
                return false;
            }
            *ctx = ThemeContext::new(theme);
            published = Some(ctx.clone());
            true
        });
        published
    }
}

/// A preference change waiting to reach the store
#[derive(Debug, Clone, Copy)]
enum PreferenceWrite {
    Set(Mode),
    Remove,
}

#[derive(Default)]
struct WriteQueue {
    issued: u64,
    handles: Vec<JoinHandle<()>>,
}

/// Owns the session's theme: resolves it, publishes it, and applies user
/// changes through the resolver.
///
/// User changes are published before anything touches storage. The matching
/// write runs in the background, so a slow or stuck store delays
/// persistence only.
#[derive(Clone)]
pub struct ThemeController {
    resolver: Arc<ThemeResolver>,
    state: Arc<ThemeState>,
    /// Set once the user picks a theme; a late startup restore must not undo it
    user_changed: Arc<AtomicBool>,
    writes: Arc<Mutex<WriteQueue>>,
    /// Sequence number of the last write that reached the store
    applied: Arc<Mutex<u64>>,
}

impl ThemeController {
    /// Start with the ambient theme so rendering never waits on storage
    pub fn new(resolver: Arc<ThemeResolver>) -> Self {
        let initial = resolver.resolve(None);
        Self {
            resolver,
            state: Arc::new(ThemeState::new(initial)),
            user_changed: Arc::new(AtomicBool::new(false)),
            writes: Arc::new(Mutex::new(WriteQueue::default())),
            applied: Arc::new(Mutex::new(0)),
        }
    }

    pub fn resolver(&self) -> &ThemeResolver {
        &self.resolver
    }

    pub fn state(&self) -> &ThemeState {
        &self.state
    }

    pub fn current(&self) -> ThemeContext {
        self.state.current()
    }

    pub fn subscribe(&self) -> watch::Receiver<ThemeContext> {
        self.state.subscribe()
    }

    /// Read the persisted preference once and publish it. Skipped if the user
    /// already changed the theme while the read was in flight.
    pub async fn restore(&self) -> ThemeContext {
        let theme = self.resolver.load_persisted_or_ambient().await;
        let user_changed = &self.user_changed;
        match self
            .state
            .replace_unless(theme, || user_changed.load(Ordering::Acquire))
        {
            Some(ctx) => ctx,
            None => {
                debug!("Theme changed during restore, keeping the user's choice");
                self.current()
            }
        }
    }

    /// Run [`ThemeController::restore`] in the background
    pub fn spawn_restore(&self) -> JoinHandle<ThemeContext> {
        let this = self.clone();
        tokio::spawn(async move { this.restore().await })
    }

    pub async fn toggle(&self) -> ThemeContext {
        self.change(|current| {
            let mode = current.mode().opposite();
            (self.resolver.themes().get(mode), PreferenceWrite::Set(mode))
        })
        .await
    }

    pub async fn set_mode(&self, mode: Mode) -> ThemeContext {
        self.change(|_| (self.resolver.themes().get(mode), PreferenceWrite::Set(mode)))
            .await
    }

    /// Follow the ambient signal again and drop the saved choice
    pub async fn clear_preference(&self) -> ThemeContext {
        self.change(|_| (self.resolver.resolve(None), PreferenceWrite::Remove))
            .await
    }

    /// Wait for the preference writes issued so far
    pub async fn flush(&self) {
        let handles = std::mem::take(&mut self.writes.lock().await.handles);
        for handle in handles {
            if let Err(e) = handle.await {
                error!("Theme preference write task failed: {}", e);
            }
        }
    }

    /// Publish the next theme, then queue its write. Holding the queue lock
    /// across both keeps write order equal to publish order.
    async fn change(
        &self,
        next: impl FnOnce(&ThemeContext) -> (Arc<Theme>, PreferenceWrite),
    ) -> ThemeContext {
        let mut queue = self.writes.lock().await;
        self.user_changed.store(true, Ordering::Release);

        let (theme, write) = next(&self.current());
        let ctx = self.state.replace(theme);

        queue.issued += 1;
        let seq = queue.issued;
        queue.handles.retain(|handle| !handle.is_finished());
        queue.handles.push(self.spawn_write(seq, write));
        ctx
    }

    fn spawn_write(&self, seq: u64, write: PreferenceWrite) -> JoinHandle<()> {
        let resolver = Arc::clone(&self.resolver);
        let applied = Arc::clone(&self.applied);
        tokio::spawn(async move {
            let mut applied = applied.lock().await;
            if *applied > seq {
                debug!("Skipping superseded theme preference write {:?}", write);
                return;
            }
            match write {
                PreferenceWrite::Set(mode) => resolver.persist_mode(mode).await,
                PreferenceWrite::Remove => resolver.forget_preference().await,
            }
            *applied = seq;
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appearance::{ColorScheme, FixedAppearance};
    use crate::storage::{
        BackendType, MemoryStore, MockPreferenceStore, PreferenceStore, StorageError,
    };
    use crate::theme::Palette;
    use async_trait::async_trait;
    use std::time::Duration;
    use tokio::time::timeout;

    /// Reads nothing and never finishes a write
    struct StalledStore;

    #[async_trait]
    impl PreferenceStore for StalledStore {
        fn backend_type(&self) -> BackendType {
            BackendType::InMemory
        }

        async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            std::future::pending().await
        }

        async fn remove(&self, _key: &str) -> Result<(), StorageError> {
            std::future::pending().await
        }
    }

    const PROMPT: Duration = Duration::from_millis(200);

    fn controller(store: impl PreferenceStore + 'static, scheme: ColorScheme) -> ThemeController {
        let resolver = ThemeResolver::new(Arc::new(store), Arc::new(FixedAppearance(scheme)));
        ThemeController::new(Arc::new(resolver))
    }

    #[test]
    fn test_context_styles_follow_theme() {
        let ctx = ThemeContext::new(Arc::new(Theme::new(Mode::Dark, Palette::dark())));
        assert!(ctx.is_dark());
        assert_eq!(
            ctx.style(StyleKey::Container).background_color,
            Some(ctx.color(ColorRole::Background))
        );
    }

    #[tokio::test]
    async fn test_starts_with_ambient_before_restore() {
        let ctl = controller(MemoryStore::with_entries([("theme", "dark")]), ColorScheme::Light);
        assert!(!ctl.current().is_dark());

        let restored = ctl.restore().await;
        assert!(restored.is_dark());
        assert!(ctl.current().is_dark());
    }

    #[tokio::test]
    async fn test_subscribers_see_replacements() {
        let ctl = controller(MemoryStore::new(), ColorScheme::Light);
        let mut rx = ctl.subscribe();
        assert!(!rx.borrow().is_dark());

        ctl.toggle().await;
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_dark());

        ctl.toggle().await;
        rx.changed().await.unwrap();
        assert!(!rx.borrow_and_update().is_dark());
    }

    #[tokio::test]
    async fn test_toggle_persists_for_next_session() {
        let store = MemoryStore::new();
        let ctl = controller(store.clone(), ColorScheme::Light);
        ctl.restore().await;
        assert!(ctl.toggle().await.is_dark());
        ctl.flush().await;

        let next_session = controller(store, ColorScheme::Light);
        assert!(next_session.restore().await.is_dark());
    }

    #[tokio::test]
    async fn test_toggle_with_failing_store_still_updates_state() {
        let mut store = MockPreferenceStore::new();
        store
            .expect_set()
            .returning(|_, _| Err(StorageError::Internal("quota exceeded".to_string())));

        let ctl = controller(store, ColorScheme::Dark);
        assert!(!ctl.toggle().await.is_dark());
        assert!(!ctl.current().is_dark());
    }

    #[tokio::test]
    async fn test_restore_after_user_choice_keeps_choice() {
        // A store whose read lags behind: it still reports the old value
        let mut store = MockPreferenceStore::new();
        store
            .expect_get()
            .returning(|_| Ok(Some("light".to_string())));
        store.expect_set().returning(|_, _| Ok(()));

        let ctl = controller(store, ColorScheme::Light);
        ctl.set_mode(Mode::Dark).await;

        let restored = ctl.restore().await;
        assert!(restored.is_dark());
        assert!(ctl.current().is_dark());
    }

    #[tokio::test]
    async fn test_spawn_restore() {
        let ctl = controller(MemoryStore::with_entries([("theme", "dark")]), ColorScheme::Light);
        let ctx = ctl.spawn_restore().await.unwrap();
        assert!(ctx.is_dark());
    }

    #[tokio::test]
    async fn test_clear_preference_returns_to_ambient() {
        let store = MemoryStore::with_entries([("theme", "light")]);
        let ctl = controller(store.clone(), ColorScheme::Dark);
        assert!(!ctl.restore().await.is_dark());

        assert!(ctl.clear_preference().await.is_dark());
        ctl.flush().await;
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_toggle_publishes_while_write_is_stuck() {
        let ctl = controller(StalledStore, ColorScheme::Light);
        let mut rx = ctl.subscribe();

        let toggled = timeout(PROMPT, ctl.toggle())
            .await
            .expect("toggle waited on the store");
        assert!(toggled.is_dark());
        assert!(ctl.current().is_dark());

        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_dark());

        let back = timeout(PROMPT, ctl.toggle()).await.unwrap();
        assert!(!back.is_dark());
        assert!(!ctl.current().is_dark());
    }

    #[tokio::test]
    async fn test_set_mode_publishes_while_write_is_stuck() {
        let ctl = controller(StalledStore, ColorScheme::Light);
        let ctx = timeout(PROMPT, ctl.set_mode(Mode::Dark)).await.unwrap();
        assert!(ctx.is_dark());
        assert!(ctl.current().is_dark());
    }

    #[tokio::test]
    async fn test_clear_preference_publishes_while_remove_is_stuck() {
        let ctl = controller(StalledStore, ColorScheme::Dark);
        timeout(PROMPT, ctl.set_mode(Mode::Light)).await.unwrap();
        assert!(!ctl.current().is_dark());

        let cleared = timeout(PROMPT, ctl.clear_preference()).await.unwrap();
        assert!(cleared.is_dark());
        assert!(ctl.current().is_dark());
    }

    #[tokio::test]
    async fn test_flush_waits_for_writes() {
        let store = MemoryStore::new();
        let ctl = controller(store.clone(), ColorScheme::Light);

        ctl.toggle().await;
        ctl.flush().await;
        assert_eq!(store.get("theme").await.unwrap().as_deref(), Some("dark"));

        // Nothing left to wait for
        ctl.flush().await;
    }

    #[tokio::test]
    async fn test_rapid_changes_store_the_last_one() {
        let store = MemoryStore::new();
        let ctl = controller(store.clone(), ColorScheme::Light);

        for _ in 0..5 {
            ctl.toggle().await;
        }
        ctl.flush().await;
        assert!(ctl.current().is_dark());
        assert_eq!(store.get("theme").await.unwrap().as_deref(), Some("dark"));

        ctl.set_mode(Mode::Light).await;
        ctl.clear_preference().await;
        ctl.flush().await;
        assert_eq!(store.get("theme").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_skipped_restore_does_not_notify() {
        let ctl = controller(MemoryStore::with_entries([("theme", "light")]), ColorScheme::Light);
        ctl.set_mode(Mode::Dark).await;

        let mut rx = ctl.subscribe();
        assert!(rx.borrow_and_update().is_dark());

        assert!(ctl.restore().await.is_dark());
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_replace_unless() {
        let light = Arc::new(Theme::new(Mode::Light, Palette::light()));
        let dark = Arc::new(Theme::new(Mode::Dark, Palette::dark()));
        let state = ThemeState::new(light);

        assert!(state.replace_unless(Arc::clone(&dark), || true).is_none());
        assert!(!state.current().is_dark());

        let ctx = state.replace_unless(dark, || false).unwrap();
        assert!(ctx.is_dark());
        assert!(state.current().is_dark());
    }
}
