mod app;
mod config;
mod content;
mod event;
mod services;
mod session;
mod speech;

use anyhow::Result;
use clap::Parser;

use app::App;
use config::Config;
use event::{AppEvent, EventHandler};
use session::ordering::{DrillResult, Source};
use speech::engine::ConsoleEngine;

#[derive(Parser)]
#[command(name = "kaiwa", version, about = "Japanese curriculum viewer with dialogue-ordering drills")]
struct Cli {
    #[arg(short, long, help = "Lesson id to open")]
    lesson: Option<u32>,

    #[arg(long, help = "Speech language tag (e.g. ja-JP)")]
    lang: Option<String>,

    #[arg(long, help = "Speech rate")]
    rate: Option<f32>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(lesson) = cli.lesson {
        config.lesson = lesson;
    }
    if let Some(lang) = cli.lang {
        config.speech_language = lang;
    }
    if let Some(rate) = cli.rate {
        config.speech_rate = rate;
    }

    let events = EventHandler::new();
    let engine = ConsoleEngine::new(events.speech_sender());
    let mut app = App::new(config, Box::new(engine))?;

    let result = run_app(&mut app, &events);

    // Whatever happened, no utterance may outlive the session.
    app.shutdown();
    result
}

fn run_app(app: &mut App, events: &EventHandler) -> Result<()> {
    println!("Lesson {} — {}", app.content.id, app.content.title);
    for objective in &app.content.objectives {
        println!("  · {objective}");
    }
    println!();
    print_help();

    // Which drill the pick/verify/reset commands apply to.
    let mut current_drill: Option<usize> = None;

    loop {
        match events.next()? {
            AppEvent::Input(line) => {
                if !handle_command(app, &mut current_drill, line.trim()) {
                    break;
                }
            }
            AppEvent::Speech(signal) => app.on_speech_signal(signal),
            AppEvent::Eof => break,
        }
    }
    Ok(())
}

fn print_help() {
    println!("commands:");
    println!("  vocab | grammar | dialogues   show lesson content");
    println!("  drills                        list available drills");
    println!("  drill <n>                     open drill n");
    println!("  p <i> / u <i>                 pick pool item i / unpick selected item i");
    println!("  v / r / a                     verify / reshuffle / play drill audio");
    println!("  play <n>                      play dialogue n");
    println!("  say <text>                    speak one line");
    println!("  q                             quit");
}

fn handle_command(app: &mut App, current_drill: &mut Option<usize>, line: &str) -> bool {
    let (cmd, arg) = match line.split_once(' ') {
        Some((cmd, arg)) => (cmd, arg.trim()),
        None => (line, ""),
    };

    match cmd {
        "q" | "quit" => return false,
        "help" => print_help(),
        "vocab" => print_vocab(app),
        "grammar" => print_grammar(app),
        "dialogues" => print_dialogues(app),
        "drills" => print_drills(app),
        "drill" => match arg.parse::<usize>() {
            Ok(n) if n < app.drill_count() => {
                *current_drill = Some(n);
                print_drill(app, n);
            }
            _ => println!("no drill {arg}; see `drills`"),
        },
        "p" | "u" => pick_command(app, *current_drill, cmd, arg),
        "v" => {
            if let Some(index) = *current_drill {
                match app.verify(index) {
                    Some(true) => println!("✅ Correct — the dialogue is in order."),
                    Some(false) => println!("❌ Not in order yet. Try moving some lines."),
                    None => {}
                }
            } else {
                println!("open a drill first: `drill <n>`");
            }
        }
        "r" => {
            if let Some(index) = *current_drill {
                app.reset(index);
                print_drill(app, index);
            }
        }
        "a" => {
            if let Some(index) = *current_drill {
                app.play_drill(index);
            }
        }
        "play" => match arg.parse::<usize>() {
            Ok(n) => app.play_dialogue(n),
            Err(_) => println!("usage: play <dialogue number>"),
        },
        "say" if !arg.is_empty() => app.speak(arg),
        "" => {}
        _ => println!("unknown command: {cmd} (try `help`)"),
    }
    true
}

fn pick_command(app: &mut App, current_drill: Option<usize>, cmd: &str, arg: &str) {
    let Some(index) = current_drill else {
        println!("open a drill first: `drill <n>`");
        return;
    };
    let Ok(pos) = arg.parse::<usize>() else {
        println!("usage: {cmd} <item number>");
        return;
    };
    let Some(drill) = app.drill_mut(index) else {
        return;
    };
    let (list, source) = if cmd == "p" {
        (&drill.pool, Source::Pool)
    } else {
        (&drill.selected, Source::Selected)
    };
    match list.get(pos).map(|t| t.id) {
        Some(token_id) => {
            app.pick(index, token_id, source);
            print_drill(app, index);
        }
        None => println!("no item {pos}"),
    }
}

fn print_vocab(app: &App) {
    for item in &app.content.vocab {
        if app.config.show_romaji {
            println!("  {}  ({})  — {}", item.jp, item.romaji, item.meaning);
        } else {
            println!("  {}  — {}", item.jp, item.meaning);
        }
    }
}

fn print_grammar(app: &App) {
    let Some(grammar) = &app.content.grammar else {
        println!("  (no grammar section)");
        return;
    };
    println!("{}", grammar.title);
    for point in &grammar.points {
        println!("  ◦ {}", point.rule);
        if !point.jp.is_empty() {
            println!("    例: {}  ({})  — {}", point.jp, point.romaji, point.meaning);
        }
        for step in &point.steps {
            println!("      - {step}");
        }
    }
}

fn print_dialogues(app: &App) {
    for (i, dialogue) in app.content.dialogues.iter().enumerate() {
        println!("[{i}] {}", dialogue.title);
        for (j, line) in dialogue.kanji.iter().enumerate() {
            println!("    {line}");
            if let Some(translation) = dialogue.translation.get(j) {
                println!("      {translation}");
            }
        }
    }
}

fn print_drills(app: &App) {
    if app.quiz_sets.is_empty() {
        println!("  (this lesson has no drills)");
        return;
    }
    for (i, set) in app.quiz_sets.iter().enumerate() {
        let title = set.title.as_deref().unwrap_or("ordering drill");
        println!("[{i}] {title} ({} lines)", set.lines.len());
    }
}

fn print_drill(app: &mut App, index: usize) {
    let Some(drill) = app.drill_mut(index) else {
        return;
    };
    println!("pool:");
    for (i, token) in drill.pool.iter().enumerate() {
        println!("  p {i}: {}", token.text);
    }
    println!("selected:");
    for (i, token) in drill.selected.iter().enumerate() {
        println!("  u {i}: {}", token.text);
    }
    match drill.result {
        DrillResult::Correct => println!("  ✅ correct"),
        DrillResult::Incorrect => println!("  ❌ not yet"),
        DrillResult::Unset => {}
    }
}
