use color_eyre::eyre::Report;
use core::time;
use log::*;
use ratatui::{
    crossterm::{
        event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    layout::Rect,
    prelude::CrosstermBackend,
    Terminal,
};
use std::{
    io::{self, Stdout},
    sync::Arc,
};

use super::{
    store::{state::State, store::Store},
    views::{
        main::MainView,
        traits::{CustomWidgetContext, CustomWidgetRef, EventHandler, View},
    },
};

struct App {
    store: Arc<Store>,
    main_view: Box<dyn View>,
}

impl App {
    fn new(store: Arc<Store>) -> Self {
        let store_clone = Arc::clone(&store);
        Self {
            store,
            main_view: Box::new(MainView::new(store_clone)),
        }
    }

    pub fn get_state(&self) -> State {
        self.store.get_state()
    }
}

pub fn launch(store: Arc<Store>) -> Result<(), Report> {
    // setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(store);

    // start app loop
    let res = run_app(&mut terminal, &mut app);

    // restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        let state = app.get_state();
        let mut app_area = Rect::default();

        terminal.draw(|f| {
            app_area = f.area();
            let ctx = CustomWidgetContext {
                state: state.clone(),
                app_area,
            };
            app.main_view.render_ref(f.area(), f.buffer_mut(), &ctx);
        })?;

        // poll so the draw loop keeps ticking even without input
        if let Ok(has_event) = event::poll(time::Duration::from_millis(60)) {
            if has_event {
                let evt = event::read()?;
                let ctx = CustomWidgetContext {
                    state: state.clone(),
                    app_area,
                };

                let handled = app.main_view.process_event(&evt, &ctx);

                if !handled {
                    if let Event::Key(key) = evt {
                        match key.code {
                            KeyCode::Char('q') => return Ok(()),
                            KeyCode::Char('c') => {
                                if key.modifiers == KeyModifiers::CONTROL {
                                    return Ok(());
                                }
                            }
                            _ => {}
                        }
                    }
                }
            }
        }
    }
}
