use ratatui::{crossterm::event::Event, layout::Rect};

use crate::ui::store::state::{State, ViewID};

/// Context handed to every widget and view for rendering and event
/// handling: a snapshot of store state plus the total app area so views
/// can size popovers from the full display.
pub struct CustomWidgetContext {
    pub state: State,
    pub app_area: Rect,
}

pub trait EventHandler {
    fn process_event(&self, evt: &Event, ctx: &CustomWidgetContext) -> bool;
}

pub trait CustomWidget {
    fn render(self, area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext);
}

pub trait CustomWidgetRef {
    fn render_ref(&self, area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext);
}

pub trait CustomStatefulWidget {
    type State;

    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
        ctx: &CustomWidgetContext,
    );
}

pub trait View: EventHandler + CustomWidgetRef {
    fn id(&self) -> ViewID;
    fn legend(&self, _state: &State) -> &str {
        ""
    }
}
