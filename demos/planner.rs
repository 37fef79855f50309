use courseplan::course::Catalog;
use courseplan::scheduler::Scheduler;
use courseplan::serialize::PlanSummary;
use std::io::Write;
use std::path::PathBuf;

fn print_help() {
    println!("Commands:");
    println!("  LIST");
    println!("  TAKE <number>");
    println!("  NEXT");
    println!("  PLAN");
    println!("  EXIT");
}

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "courses.csv".to_string());

    let catalog = match Catalog::load(PathBuf::from(path)) {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("failed to load the course list: {}", err);
            std::process::exit(1);
        }
    };

    let mut scheduler = match Scheduler::new(catalog) {
        Ok(scheduler) => scheduler,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    println!("{}", scheduler.available_courses());

    loop {
        if scheduler.all_taken() {
            println!("Every course has been taken. The plan is complete.");
            break;
        }

        print!("> ");
        std::io::stdout().flush().unwrap();
        let mut input = String::new();
        std::io::stdin().read_line(&mut input).unwrap();

        let input = input.trim().to_uppercase();
        let input: Vec<&str> = input.split_whitespace().collect();

        if input.len() == 0 {
            print!("\x1B[2J\x1B[1;1H");
            println!("Please enter a command");
            print_help();
            continue;
        }

        match input[0] {
            "LIST" | "LS" => {
                print!("\x1B[2J\x1B[1;1H");
                println!("{}", scheduler.available_courses());
            }
            "TAKE" | "+" => {
                if input.len() != 2 {
                    println!("Invalid command");
                    continue;
                }
                let choice: usize = match input[1].parse() {
                    Ok(choice) => choice,
                    Err(_) => {
                        println!("Invalid command");
                        continue;
                    }
                };
                match scheduler.vertex_for_choice(choice) {
                    Some(vertex) => {
                        scheduler.take_course(vertex);
                        println!("{}", scheduler.available_courses());
                    }
                    None => println!("No course is listed at that number"),
                }
            }
            "NEXT" | "N" => {
                let next = scheduler.current_semester() + 1;
                scheduler.set_current_semester(next);
                print!("\x1B[2J\x1B[1;1H");
                println!("{}", scheduler.available_courses());
            }
            "PLAN" | "S" => {
                print!("\x1B[2J\x1B[1;1H");
                let summary = PlanSummary::from(&scheduler);
                for (i, names) in summary.semesters.iter().enumerate() {
                    println!("Semester {}: {}", i + 1, names.join(", "));
                }
            }
            "EXIT" => {
                break;
            }
            _ => {
                print!("\x1B[2J\x1B[1;1H");
                println!("Invalid command");
                print_help();
            }
        }
    }
}
