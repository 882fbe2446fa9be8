use std::{collections::HashMap, rc::Rc, sync::Arc};

use ratatui::{
    crossterm::event::{Event as CrossTermEvent, KeyCode, KeyEventKind},
    layout::{Constraint, Layout, Rect},
    style::{palette::tailwind, Style},
    text::Line,
    widgets::{Block, BorderType, Clear as ClearWidget, Padding, Paragraph, Widget, WidgetRef},
};

use crate::ui::{
    components::{footer::InfoFooter, header::Header, popover::get_popover_area},
    store::{
        action::Action,
        state::{State, ViewID},
        store::Store,
    },
};

use super::{
    contacts::ContactsView,
    traits::{CustomWidget, CustomWidgetContext, CustomWidgetRef, EventHandler, View},
};

const DEFAULT_PADDING: Padding = Padding::horizontal(2);

/// Window chrome: title, status line, the active view, the footer
/// legend, and the popover layers (removal confirmation, errors).
pub struct MainView {
    store: Arc<Store>,
    sub_views: HashMap<ViewID, Box<dyn View>>,
}

impl MainView {
    pub fn new(store: Arc<Store>) -> Self {
        let mut sub_views: HashMap<ViewID, Box<dyn View>> = HashMap::new();

        let contacts = Box::new(ContactsView::new(Arc::clone(&store)));
        sub_views.insert(contacts.id(), contacts);

        Self { store, sub_views }
    }

    fn render_buffer_bg(&self, area: Rect, buf: &mut ratatui::prelude::Buffer, state: &State) {
        let block = Block::new()
            .style(Style::new().bg(state.colors.buffer_bg))
            .padding(DEFAULT_PADDING);
        block.render(area, buf);
    }

    fn get_top_section_areas(&self, area: Rect) -> Rc<[Rect]> {
        Layout::horizontal([
            Constraint::Percentage(20),
            Constraint::Percentage(100),
            Constraint::Percentage(20),
        ])
        .split(area)
    }

    fn render_top(
        &self,
        sections: Rc<[Rect]>,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let logo =
            Paragraph::new("\ncontact-list").style(Style::new().fg(ctx.state.colors.border_color));
        let logo_block: Block<'_> = Block::bordered()
            .border_style(Style::new().fg(ctx.state.colors.border_color))
            .border_type(BorderType::Double)
            .padding(DEFAULT_PADDING);
        let logo_inner_area = logo_block.inner(sections[0]);

        logo_block.render(sections[0], buf);
        logo.render_ref(logo_inner_area, buf);

        // the status surface: the last operation message, verbatim
        if let Some(message) = ctx.state.message.clone() {
            let message_block = Block::default().padding(Padding::uniform(2));
            let message_inner_area = message_block.inner(sections[1]);
            let m = Header::new(format!("\n\n{message}"));
            message_block.render(sections[1], buf);
            m.render(message_inner_area, buf, ctx);
        }

        let count = ctx.state.registry.len();
        let noun = if count == 1 { "contact" } else { "contacts" };
        let tally = Paragraph::new(format!("\n{count} {noun}"))
            .style(Style::new().fg(ctx.state.colors.border_color));
        let tally_block = Block::bordered()
            .border_style(Style::new().fg(ctx.state.colors.border_color))
            .border_type(BorderType::Double)
            .padding(DEFAULT_PADDING);
        let tally_inner_area = tally_block.inner(sections[2]);

        tally_block.render(sections[2], buf);
        tally.render_ref(tally_inner_area, buf);
    }

    fn render_middle_view(
        &self,
        view: &Box<dyn View>,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let block: Block<'_> = Block::bordered()
            .border_style(Style::new().fg(ctx.state.colors.border_color))
            .border_type(BorderType::Plain)
            .padding(DEFAULT_PADDING);
        let inner_area = block.inner(area);
        block.render(area, buf);
        view.render_ref(inner_area, buf, ctx);
    }

    fn render_confirm_popover(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        if let Some(pending) = ctx.state.pending_removal.as_ref() {
            let block = Block::bordered()
                .border_type(BorderType::Double)
                .border_style(
                    Style::new()
                        .fg(ctx.state.colors.border_color)
                        .bg(ctx.state.colors.buffer_bg),
                )
                .padding(Padding::uniform(2))
                .style(Style::default().bg(ctx.state.colors.buffer_bg));
            let inner_area = block.inner(area);
            let [prompt_area, choices_area] = Layout::vertical([
                Constraint::Percentage(100), // prompt
                Constraint::Length(1),       // choices
            ])
            .areas(inner_area);

            let prompt = Line::from(pending.prompt());
            let choices = Paragraph::new("(y) yes | (n) no").centered();

            ClearWidget.render(area, buf);
            block.render(area, buf);
            prompt.render(prompt_area, buf);
            choices.render(choices_area, buf);
        }
    }

    fn render_error_popover(&self, area: Rect, buf: &mut ratatui::prelude::Buffer, state: &State) {
        if let Some(msg) = state.error.clone() {
            let block = Block::bordered()
                .border_type(BorderType::Double)
                .border_style(
                    Style::new()
                        .fg(tailwind::RED.c600)
                        .bg(state.colors.buffer_bg),
                )
                .padding(Padding::uniform(2))
                .style(Style::default().bg(state.colors.buffer_bg));
            let inner_area = block.inner(area);
            let [msg_area, exit_area] = Layout::vertical([
                Constraint::Percentage(100), // msg
                Constraint::Length(1),       // exit
            ])
            .areas(inner_area);

            let message = Line::from(format!("Error: {}", msg));
            let exit = Paragraph::new("Press enter to clear error").centered();
            ClearWidget.render(area, buf);
            block.render(area, buf);
            message.render(msg_area, buf);
            exit.render(exit_area, buf);
        }
    }

    fn render_footer(
        &self,
        legend: &str,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let footer = InfoFooter::new(legend.to_string());
        footer.render(area, buf, ctx);
    }
}

impl View for MainView {
    fn id(&self) -> ViewID {
        ViewID::Main
    }
}

impl CustomWidgetRef for MainView {
    fn render_ref(&self, area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext) {
        // consists of 3 vertical rectangles (top, middle, bottom)
        let page_areas = Layout::vertical([
            Constraint::Length(5),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(area);

        let view_id = ctx.state.view_id.clone();
        let view = self.sub_views.get(&view_id).unwrap();
        let legend = view.legend(&ctx.state);

        // render background for entire display
        self.render_buffer_bg(area, buf, &ctx.state);
        // title, status line, contact tally
        let top_section_areas = self.get_top_section_areas(page_areas[0]);
        self.render_top(top_section_areas, buf, ctx);
        // view
        self.render_middle_view(view, page_areas[1], buf, ctx);
        // legend for current view
        self.render_footer(legend, page_areas[2], buf, ctx);

        // popovers render last so they properly layer on top
        self.render_confirm_popover(get_popover_area(area, 50, 40), buf, ctx);
        self.render_error_popover(get_popover_area(area, 50, 40), buf, &ctx.state);
    }
}

impl EventHandler for MainView {
    fn process_event(&self, evt: &CrossTermEvent, ctx: &CustomWidgetContext) -> bool {
        // the confirmation popover is modal: nothing else may mutate the
        // registry between the request and the user's answer
        if ctx.state.pending_removal.is_some() {
            if let CrossTermEvent::Key(key) = evt {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('y') | KeyCode::Char('Y') => {
                            self.store.dispatch(Action::AnswerRemoval(true));
                        }
                        // dismissing the prompt defaults to "no"
                        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                            self.store.dispatch(Action::AnswerRemoval(false));
                        }
                        _ => {}
                    }
                }
            }
            return true;
        }

        if ctx.state.error.is_some() {
            if let CrossTermEvent::Key(key) = evt {
                if key.kind == KeyEventKind::Press && key.code == KeyCode::Enter {
                    self.store.dispatch(Action::SetError(None));
                }
            }
            return true;
        }

        let view_id = ctx.state.view_id.clone();
        let view = self.sub_views.get(&view_id).unwrap();
        view.process_event(evt, ctx)
    }
}
