//! Interactive session: login gate and the numbered menu loop

use crate::output::{
    format_money, render_dashboard, render_load_summary, render_vehicle, render_vehicle_table,
};
use crate::terminal::Colorize;
use dialoguer::{Confirm, Input, Password};
use parking_app::app::ParkingService;
use parking_app::auth::{Authenticator, StaticCredentials};
use parking_app::config::Config;
use parking_app::repository::{open_vehicle_repo, FileVehicleRepository};
use parking_domain::model::Vehicle;
use parking_domain::service::SortKey;
use parking_types::{Error, Result, StoreError};
use tracing::info;

type Session = ParkingService<FileVehicleRepository>;

/// Entries of the main menu, numbered as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddVehicle,
    DisplayVehicles,
    LinearSearch,
    BinarySearch,
    Sort(SortKey),
    DeleteVehicle,
    Save,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 10] = [
        MenuChoice::AddVehicle,
        MenuChoice::DisplayVehicles,
        MenuChoice::LinearSearch,
        MenuChoice::BinarySearch,
        MenuChoice::Sort(SortKey::Id),
        MenuChoice::Sort(SortKey::Charge),
        MenuChoice::Sort(SortKey::Duration),
        MenuChoice::DeleteVehicle,
        MenuChoice::Save,
        MenuChoice::Exit,
    ];

    pub fn from_number(number: u8) -> Option<Self> {
        let index = usize::from(number).checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    pub fn number(self) -> u8 {
        Self::ALL
            .iter()
            .position(|choice| *choice == self)
            .map_or(0, |index| index as u8 + 1)
    }

    pub fn label(self) -> String {
        match self {
            MenuChoice::AddVehicle => "Add Vehicle".to_string(),
            MenuChoice::DisplayVehicles => "Display Vehicles".to_string(),
            MenuChoice::LinearSearch => "Linear Search".to_string(),
            MenuChoice::BinarySearch => "Binary Search".to_string(),
            MenuChoice::Sort(key) => format!("Sort by {} ({})", key, key.algorithm()),
            MenuChoice::DeleteVehicle => "Delete Vehicle".to_string(),
            MenuChoice::Save => "Save Data".to_string(),
            MenuChoice::Exit => "Exit".to_string(),
        }
    }
}

fn prompt_error(e: dialoguer::Error) -> Error {
    Error::Prompt(e.to_string())
}

/// Run a full interactive session against the configured data file
pub fn run_session(config: &Config) -> Result<()> {
    println!(
        "{}",
        "\n==============================\n   Parking Management System\n=============================="
            .heading()
    );

    if !login(&StaticCredentials::from_config(config))? {
        println!("{}", "Access denied!".error());
        return Ok(());
    }
    info!("Login accepted");

    let mut session = ParkingService::new(open_vehicle_repo(config));
    if config.autoload {
        load_into(&mut session);
    }

    loop {
        print!("{}", render_dashboard(&session.dashboard()));
        print_menu();

        let number: u8 = Input::new()
            .with_prompt("Enter choice")
            .validate_with(|n: &u8| -> std::result::Result<(), &str> {
                if MenuChoice::from_number(*n).is_some() {
                    Ok(())
                } else {
                    Err("Invalid choice. Enter a number from 1 to 10")
                }
            })
            .interact_text()
            .map_err(prompt_error)?;

        let Some(choice) = MenuChoice::from_number(number) else {
            continue;
        };

        match choice {
            MenuChoice::AddVehicle => add_vehicle(&mut session)?,
            MenuChoice::DisplayVehicles => print!("{}", render_vehicle_table(session.vehicles())),
            MenuChoice::LinearSearch => linear_search(&session)?,
            MenuChoice::BinarySearch => binary_search(&session)?,
            MenuChoice::Sort(key) => {
                session.sort(key);
                println!(
                    "{}",
                    format!("Sorted by {} using {}.", key, key.algorithm()).success()
                );
            }
            MenuChoice::DeleteVehicle => delete_vehicle(&mut session)?,
            MenuChoice::Save => save(&mut session),
            MenuChoice::Exit => {
                exit(&mut session, config)?;
                return Ok(());
            }
        }
    }
}

fn login(auth: &impl Authenticator) -> Result<bool> {
    println!("Login");
    let username: String = Input::new()
        .with_prompt("Username")
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)?;
    let password = Password::new()
        .with_prompt("Password")
        .allow_empty_password(true)
        .interact()
        .map_err(prompt_error)?;

    Ok(auth.authenticate(&username, &password))
}

fn load_into(session: &mut Session) {
    match session.load() {
        Ok(summary) => print!("{}", render_load_summary(&summary)),
        Err(e) => println!("{}", format!("Could not load data file: {}", e).error()),
    }
}

fn print_menu() {
    println!();
    for choice in MenuChoice::ALL {
        println!("{:>2}. {}", choice.number(), choice.label());
    }
}

/// Prompt for a positive vehicle ID, re-prompting until one is given
fn prompt_id(prompt: &str) -> Result<u32> {
    Input::new()
        .with_prompt(prompt)
        .validate_with(|id: &u32| -> std::result::Result<(), &str> {
            if *id > 0 {
                Ok(())
            } else {
                Err("Invalid ID. Enter a positive integer")
            }
        })
        .interact_text()
        .map_err(prompt_error)
}

fn add_vehicle(session: &mut Session) -> Result<()> {
    let id = prompt_id("Enter ticket ID (positive integer)")?;
    if !session.is_unique_id(id) {
        println!("{}", StoreError::DuplicateId(id).to_string().error());
        return Ok(());
    }

    let plate: String = Input::new()
        .with_prompt("Enter plate number")
        .validate_with(|plate: &String| -> std::result::Result<(), &str> {
            if plate.trim().is_empty() {
                Err("Plate number cannot be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .map_err(prompt_error)?;
    if session.is_plate_duplicate(plate.trim()) {
        println!("{}", "Warning: Plate number already exists.".warning());
    }

    let vehicle_type: String = Input::new()
        .with_prompt("Enter vehicle type (Car/Bike/Truck)")
        .interact_text()
        .map_err(prompt_error)?;

    let duration: f64 = Input::new()
        .with_prompt("Enter parking duration (in hours, e.g., 1.5 for 90 minutes)")
        .validate_with(|hours: &f64| -> std::result::Result<(), &str> {
            if hours.is_finite() && *hours > 0.0 {
                Ok(())
            } else {
                Err("Invalid duration. Enter a positive number")
            }
        })
        .interact_text()
        .map_err(prompt_error)?;

    match session.add_vehicle(id, &plate, &vehicle_type, duration) {
        Ok(vehicle) => println!(
            "{}",
            format!(
                "Vehicle added successfully! Charge: {}",
                format_money(vehicle.charge)
            )
            .success()
        ),
        Err(e @ (Error::Validation(_) | Error::Store(_))) => println!("{}", e.to_string().error()),
        Err(e) => return Err(e),
    }
    Ok(())
}

fn linear_search(session: &Session) -> Result<()> {
    let id = prompt_id("Enter ID to search")?;
    print_search_hit(session.linear_search(id));
    Ok(())
}

fn binary_search(session: &Session) -> Result<()> {
    if !session.is_sorted_by_id() {
        println!(
            "{}",
            "Error: List must be sorted by ID (use option 5 first)!".error()
        );
        return Ok(());
    }
    if session.vehicles().is_empty() {
        println!("{}", "No vehicles to search.".error());
        return Ok(());
    }

    let id = prompt_id("Enter ID to search")?;
    match session.binary_search(id) {
        Ok(hit) => print_search_hit(hit),
        Err(e) => println!("{}", e.to_string().error()),
    }
    Ok(())
}

fn print_search_hit(hit: Option<&Vehicle>) {
    match hit {
        Some(vehicle) => {
            println!("{}", "Vehicle Found!".success());
            print!("{}", render_vehicle(vehicle));
        }
        None => println!("{}", "Vehicle Not Found!".error()),
    }
}

fn delete_vehicle(session: &mut Session) -> Result<()> {
    let id = prompt_id("Enter ID to delete")?;
    if session.delete_vehicle(id) {
        println!("{}", "Vehicle deleted successfully!".success());
    } else {
        println!("{}", "Vehicle not found!".error());
    }
    Ok(())
}

fn save(session: &mut Session) {
    match session.save() {
        Ok(count) => println!(
            "{}",
            format!("Data saved to file successfully! ({} vehicle(s))", count).success()
        ),
        Err(e) => println!("{}", format!("Could not save data file: {}", e).error()),
    }
}

fn exit(session: &mut Session, config: &Config) -> Result<()> {
    if session.has_unsaved_changes() && config.confirm_save_on_exit {
        let save_now = Confirm::new()
            .with_prompt("You have unsaved changes. Save before exiting?")
            .default(true)
            .interact()
            .map_err(prompt_error)?;
        if save_now {
            save(session);
        }
    }
    println!("{}", "Exiting...".info());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_numbers_match_positions() {
        for (index, choice) in MenuChoice::ALL.iter().enumerate() {
            assert_eq!(choice.number() as usize, index + 1);
            assert_eq!(MenuChoice::from_number(choice.number()), Some(*choice));
        }
    }

    #[test]
    fn test_out_of_range_choices() {
        assert_eq!(MenuChoice::from_number(0), None);
        assert_eq!(MenuChoice::from_number(11), None);
    }

    #[test]
    fn test_sort_entries() {
        assert_eq!(MenuChoice::from_number(5), Some(MenuChoice::Sort(SortKey::Id)));
        assert_eq!(
            MenuChoice::from_number(6).map(MenuChoice::label).as_deref(),
            Some("Sort by Charge (Selection Sort)")
        );
        assert_eq!(
            MenuChoice::Sort(SortKey::Duration).label(),
            "Sort by Duration (Insertion Sort)"
        );
    }

    #[test]
    fn test_exit_is_last() {
        assert_eq!(MenuChoice::from_number(10), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::Save.label(), "Save Data");
    }
}
