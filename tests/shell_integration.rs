//! Shell lifecycle with the built-in demo game

use pixhost::config::ShellConfig;
use pixhost::scale::ScaleMode;
use pixhost::shell::demo::{DemoGame, BACKGROUND, FOREGROUND};
use pixhost::shell::{codes, Shell};

fn config(width: u32, height: u32, mode: ScaleMode) -> ShellConfig {
    let mut config = ShellConfig::default();
    config.screen.width = width;
    config.screen.height = height;
    config.present.mode = mode;
    config
}

#[test]
fn test_demo_presents_only_its_two_colors() {
    let mut shell = Shell::new(DemoGame::new(), config(48, 32, ScaleMode::Epx), "demo");
    assert_eq!(shell.run_frames(12), 12);

    let presented = shell.presented();
    assert_eq!(presented.dimensions(), (96, 64));
    assert!(presented.as_slice().iter().all(|&p| p == BACKGROUND || p == FOREGROUND));
    assert!(presented.as_slice().contains(&FOREGROUND));
}

#[test]
fn test_held_key_moves_crosshair() {
    let mut shell = Shell::new(DemoGame::new(), config(48, 32, ScaleMode::Identity), "demo");
    shell.start();
    shell.key_down(codes::LEFT);
    shell.run_frames(4);
    shell.key_up(codes::LEFT);
    shell.run_frames(2);
    assert_eq!(shell.game().cross(), Some((24 - 4, 16)));
}

#[test]
fn test_frame_limit_ends_run_and_deinit() {
    let game = DemoGame::new().with_frame_limit(3);
    let mut shell = Shell::new(game, config(16, 16, ScaleMode::Epx), "demo");
    assert_eq!(shell.run_frames(100), 3);
    assert!(!shell.is_running());
    assert_eq!(shell.frame_count(), 3);
}

#[test]
fn test_run_frames_uses_frame_interval() {
    let mut cfg = config(16, 16, ScaleMode::Identity);
    cfg.screen.fps = 20;
    let mut shell = Shell::new(DemoGame::new(), cfg, "demo");
    shell.run_frames(10);
    assert!((shell.game().total_seconds() - 0.5).abs() < 1e-9);
}

#[test]
fn test_args_reach_the_shell() {
    let shell = Shell::new(
        DemoGame::new(),
        ShellConfig::default(),
        "demo.exe \"level one.map\" --seed 4",
    );
    assert_eq!(
        shell.args().iter().collect::<Vec<_>>(),
        vec!["demo.exe", "level one.map", "--seed", "4"]
    );
}
