//! Reusable row containers lent to the engine by the host.
//!
//! A [`RowSlot`] carries an explicit [`SlotState`] tag. The engine checks the
//! tag before writing content and rebuilds static chrome only when the slot is
//! fresh or was last used for a different row kind. Hosts read the chrome back
//! to draw it.

use core::fmt;

use portable_atomic_util::Arc;

use crate::style::Padding;

/// Presentation direction supplied by the host environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LayoutDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl LayoutDirection {
    /// Alignment forced onto text labels in this direction.
    pub fn alignment(self) -> TextAlignment {
        match self {
            LayoutDirection::LeftToRight => TextAlignment::Natural,
            LayoutDirection::RightToLeft => TextAlignment::Right,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TextAlignment {
    #[default]
    Natural,
    Right,
}

/// Color role of an action control's title.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ControlColor {
    #[default]
    Accent,
    Muted,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Label {
    text: String,
    alignment: TextAlignment,
}

impl Label {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn alignment(&self) -> TextAlignment {
        self.alignment
    }

    pub(crate) fn set(&mut self, text: &str, alignment: TextAlignment) {
        if self.text != text {
            self.text.clear();
            self.text.push_str(text);
        }
        self.alignment = alignment;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    asset: String,
}

impl Icon {
    pub fn asset(&self) -> &str {
        &self.asset
    }
}

/// Shared so a host can take the handler out of the slot before calling it.
pub type TapHandler = Arc<Box<dyn Fn() + Send + Sync>>;

/// The purchase button of an item row.
#[derive(Default)]
pub struct ActionControl {
    title: String,
    enabled: bool,
    color: ControlColor,
    handler: Option<TapHandler>,
}

impl ActionControl {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn color(&self) -> ControlColor {
        self.color
    }

    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    /// Deliver a user tap.
    ///
    /// Invokes the wired handler once and returns `true` when the control is
    /// enabled; a tap on a disabled control is ignored.
    pub fn tap(&self) -> bool {
        match self.enabled_handler() {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    /// The handler a tap would invoke right now, if the control is enabled.
    ///
    /// Hosts that keep slots behind a lock take the handler out with this and
    /// call it after releasing the lock, so the handler may touch the host.
    pub fn enabled_handler(&self) -> Option<TapHandler> {
        match (&self.handler, self.enabled) {
            (Some(handler), true) => Some(Arc::clone(handler)),
            _ => None,
        }
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub(crate) fn set_handler(&mut self, handler: TapHandler) {
        self.handler = Some(handler);
    }

    pub(crate) fn set_available(&mut self, available: bool) {
        self.enabled = available;
        self.color = if available {
            ControlColor::Accent
        } else {
            ControlColor::Muted
        };
    }
}

impl fmt::Debug for ActionControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionControl")
            .field("title", &self.title)
            .field("enabled", &self.enabled)
            .field("color", &self.color)
            .field("handler", &self.handler.as_ref().map(|_| "Fn()"))
            .finish()
    }
}

/// Spinner overlaid on the action control.
///
/// The engine only ever stops it. Starting it belongs to whatever flow tracks
/// an in-progress purchase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BusyIndicator {
    animating: bool,
}

impl BusyIndicator {
    pub fn start(&mut self) {
        self.animating = true;
    }

    pub fn stop(&mut self) {
        self.animating = false;
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn is_hidden(&self) -> bool {
        !self.animating
    }
}

/// Static chrome of an item row.
#[derive(Debug)]
pub struct ItemChrome {
    icon: Icon,
    title: Label,
    subtitle: Label,
    action: ActionControl,
    busy: BusyIndicator,
    insets: Padding,
}

impl ItemChrome {
    pub(crate) fn new(icon: &str, insets: Padding) -> Self {
        Self {
            icon: Icon {
                asset: icon.to_string(),
            },
            title: Label::default(),
            subtitle: Label::default(),
            action: ActionControl::default(),
            busy: BusyIndicator::default(),
            insets,
        }
    }

    pub fn icon(&self) -> &Icon {
        &self.icon
    }

    pub fn title(&self) -> &Label {
        &self.title
    }

    pub fn subtitle(&self) -> &Label {
        &self.subtitle
    }

    pub fn action(&self) -> &ActionControl {
        &self.action
    }

    pub fn busy(&self) -> &BusyIndicator {
        &self.busy
    }

    /// Mutable access for the purchase-in-progress flow.
    pub fn busy_mut(&mut self) -> &mut BusyIndicator {
        &mut self.busy
    }

    pub fn insets(&self) -> Padding {
        self.insets
    }

    pub(crate) fn parts_mut(
        &mut self,
    ) -> (&mut Label, &mut Label, &mut ActionControl, &mut BusyIndicator) {
        (
            &mut self.title,
            &mut self.subtitle,
            &mut self.action,
            &mut self.busy,
        )
    }
}

/// Static chrome of the footer row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterChrome {
    label: Label,
    padding: Padding,
}

impl FooterChrome {
    pub(crate) fn new(padding: Padding) -> Self {
        Self {
            label: Label::default(),
            padding,
        }
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub(crate) fn label_mut(&mut self) -> &mut Label {
        &mut self.label
    }
}

/// Which kind of row a slot currently holds chrome for.
#[derive(Debug, Default)]
pub enum SlotState {
    #[default]
    Uninitialized,
    Item(ItemChrome),
    Footer(FooterChrome),
}

/// A reusable row container.
#[derive(Debug, Default)]
pub struct RowSlot {
    state: SlotState,
    chrome_builds: usize,
}

impl RowSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SlotState {
        &self.state
    }

    pub fn is_uninitialized(&self) -> bool {
        matches!(self.state, SlotState::Uninitialized)
    }

    pub fn item(&self) -> Option<&ItemChrome> {
        match &self.state {
            SlotState::Item(chrome) => Some(chrome),
            _ => None,
        }
    }

    pub fn item_mut(&mut self) -> Option<&mut ItemChrome> {
        match &mut self.state {
            SlotState::Item(chrome) => Some(chrome),
            _ => None,
        }
    }

    pub fn footer(&self) -> Option<&FooterChrome> {
        match &self.state {
            SlotState::Footer(chrome) => Some(chrome),
            _ => None,
        }
    }

    /// How many times static chrome has been constructed in this slot.
    pub fn chrome_builds(&self) -> usize {
        self.chrome_builds
    }

    /// Drop any chrome, as a host does before returning a slot to a fresh pool.
    pub fn clear(&mut self) {
        self.state = SlotState::Uninitialized;
    }

    pub(crate) fn item_chrome_or_insert_with(
        &mut self,
        build: impl FnOnce() -> ItemChrome,
    ) -> &mut ItemChrome {
        if !matches!(self.state, SlotState::Item(_)) {
            self.state = SlotState::Item(build());
            self.chrome_builds += 1;
        }
        match &mut self.state {
            SlotState::Item(chrome) => chrome,
            _ => unreachable!("slot tagged as item row without item chrome"),
        }
    }

    pub(crate) fn footer_chrome_or_insert_with(
        &mut self,
        build: impl FnOnce() -> FooterChrome,
    ) -> &mut FooterChrome {
        if !matches!(self.state, SlotState::Footer(_)) {
            self.state = SlotState::Footer(build());
            self.chrome_builds += 1;
        }
        match &mut self.state {
            SlotState::Footer(chrome) => chrome,
            _ => unreachable!("slot tagged as footer row without footer chrome"),
        }
    }
}
