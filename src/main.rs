use clap::Parser;
use macroquad::prelude::*;

use life_heatmap::{
    Command, SimulationController, Snapshot, Ticker,
    config::Args,
    input::{self, Action},
    rendering,
    ui::{self, PatternMenu, StatusLine},
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Game of Life - Color Heatmap".to_owned(),
        window_width: ui::window_width() as i32,
        window_height: ui::window_height() as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Apply startup options; failures are logged and the session starts empty
fn prepare(controller: &mut SimulationController, args: &Args) {
    if let Some(path) = &args.load {
        let restored = Snapshot::load(path).and_then(|snapshot| controller.restore(&snapshot));
        if let Err(err) = restored {
            log::error!("could not restore {}: {}", path.display(), err);
        }
    }

    if let Some(id) = &args.pattern {
        let origin = controller.library().get(id).map(ui::centered_origin);
        let loaded = origin.and_then(|(x, y)| controller.load_pattern(id, x, y));
        if let Err(err) = loaded {
            log::error!("could not load startup pattern: {}", err);
        }
    }
}

/// Commands for a pattern picked from the menu: pause, wipe, stamp centered
fn pattern_commands(controller: &SimulationController, id: &str) -> Vec<Command> {
    let Ok(pattern) = controller.library().get(id) else {
        return Vec::new();
    };
    let (x, y) = ui::centered_origin(pattern);
    vec![
        Command::Stop,
        Command::Clear,
        Command::LoadPattern { id: id.to_owned(), x, y },
    ]
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut controller = SimulationController::new().with_strategy(args.strategy());
    prepare(&mut controller, &args);

    let mut ticker = Ticker::new(args.tps);
    let mut menu = PatternMenu::new(controller.library());
    let mut status = StatusLine::new();

    log::info!(
        "{}x{} grid, {} patterns, {:.0} gen/s",
        controller.grid().width(),
        controller.grid().height(),
        controller.list_patterns().len(),
        ticker.steps_per_second
    );

    'frames: loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons(controller.is_running());

        // Gather this frame's actions; the open menu captures the mouse
        let mut actions: Vec<Action> = Vec::new();
        if menu.is_open() {
            if let Some(id) = menu.update(mouse_pos) {
                actions.extend(pattern_commands(&controller, id).into_iter().map(Action::Engine));
            }
        } else {
            actions.extend(input::process_button_clicks(&buttons, mouse_pos));
            actions.extend(input::handle_mouse_edit(&controller, mouse_pos));
        }
        actions.extend(input::process_keyboard_input(controller.is_running(), menu.is_open()));

        for action in actions {
            match action {
                Action::Engine(command) => match controller.apply(&command) {
                    Ok(()) => status.clear(),
                    Err(err) => {
                        log::warn!("rejected {:?}: {}", command, err);
                        status.show(err.to_string());
                    }
                },
                Action::TogglePatternMenu => menu.toggle(),
                Action::CloseMenu => menu.close(),
                Action::Faster => ticker.adjust_speed(5.0),
                Action::Slower => ticker.adjust_speed(-5.0),
                Action::SaveSnapshot => match controller.snapshot().save(&args.save) {
                    Ok(()) => status.show(format!("saved {}", args.save.display())),
                    Err(err) => {
                        log::warn!("save failed: {}", err);
                        status.show(err.to_string());
                    }
                },
                Action::Quit => break 'frames,
            }
        }

        let frame_time = get_frame_time();
        status.update(frame_time);
        if controller.is_running() {
            if ticker.ready(frame_time) {
                controller.tick();
            }
        } else {
            ticker.reset();
        }

        rendering::draw_grid(&controller);
        if menu.is_open() {
            rendering::draw_pattern_menu(&menu, mouse_pos);
        } else {
            rendering::draw_controls(&controller, &ticker, &buttons, status.text().as_deref(), mouse_pos);
        }

        next_frame().await;
    }

    log::info!("exiting at generation {}", controller.stats().generation);
}
