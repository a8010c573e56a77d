use std::fmt::Display;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use crate::billing::{calculate_fee, generate_fee_slip, summarize};
use crate::config::Config;
use crate::db::{save_routes, save_students};
use crate::store::{RouteStore, StudentStore};

use super::forms::{parse_amount, parse_id, parse_name, MenuChoice};
use super::helpers::{surface_error, Palette};
use super::screens::{menu_lines, route_lines, student_lines, summary_lines, MENU_TITLE};

/// Session state: both collections, where they are stored, and the console
/// streams the shell talks through.
pub struct App<R, W> {
    config: Config,
    routes: RouteStore,
    students: StudentStore,
    input: R,
    output: W,
    palette: Palette,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(config: Config, routes: RouteStore, students: StudentStore, input: R, output: W) -> Self {
        Self {
            config,
            routes,
            students,
            input,
            output,
            palette: Palette::plain(),
        }
    }

    /// Turn terminal colors on or off. Off by default; enable it only when the
    /// output is an interactive terminal.
    #[must_use]
    pub fn styled(mut self, enabled: bool) -> Self {
        self.palette = Palette::new(enabled);
        self
    }

    pub fn routes(&self) -> &RouteStore {
        &self.routes
    }

    pub fn students(&self) -> &StudentStore {
        &self.students
    }

    /// Consume the session and hand back the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print the title and numbered entries, leaving the cursor after the
    /// `Choose:` prompt.
    pub(crate) fn draw_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", self.palette.heading(MENU_TITLE))?;
        for line in menu_lines() {
            writeln!(self.output, "{line}")?;
        }
        write!(self.output, "Choose: ")?;
        self.output.flush().context("failed to flush console")
    }

    /// Read one line without its terminator. `None` at end of input. Bytes
    /// that are not valid UTF-8 become U+FFFD, so they fail validation like
    /// any other malformed answer.
    pub(crate) fn read_line(&mut self) -> Result<Option<String>> {
        let mut raw = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut raw)
            .context("failed to read console input")?;
        if read == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&raw);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Run one menu action. Returns `true` once the session should end.
    pub(crate) fn handle_choice(&mut self, choice: MenuChoice) -> Result<bool> {
        debug!(?choice, "menu selection");
        match choice {
            MenuChoice::ShowRoutes => self.show_routes()?,
            MenuChoice::AddRoute => self.add_route()?,
            MenuChoice::RemoveRoute => self.remove_route()?,
            MenuChoice::ShowStudents => self.show_students()?,
            MenuChoice::AddStudent => self.add_student()?,
            MenuChoice::RemoveStudent => self.remove_student()?,
            MenuChoice::FeeSlip => self.fee_slip()?,
            MenuChoice::Summary => self.summary()?,
            MenuChoice::Save => self.save()?,
            MenuChoice::Exit => {
                if let Err(err) = self.save_all() {
                    self.fail(format!("Save failed: {}", surface_error(&err)))?;
                }
                return Ok(true);
            }
        }
        self.pause()?;
        Ok(false)
    }

    /// Report a selection that is not on the menu.
    pub(crate) fn report_invalid(&mut self) -> Result<()> {
        self.fail("Invalid input.")?;
        self.pause()
    }

    pub(crate) fn say_goodbye(&mut self) -> Result<()> {
        writeln!(self.output, "Goodbye.")?;
        self.output.flush().context("failed to flush console")
    }

    /// Write both collections to their files.
    pub fn save_all(&self) -> Result<()> {
        save_routes(&self.config.routes_path(), &self.routes).context("failed to save routes")?;
        save_students(&self.config.students_path(), &self.students)
            .context("failed to save students")
    }

    fn show_routes(&mut self) -> Result<()> {
        writeln!(self.output, "\n{}", self.palette.heading("Available routes:"))?;
        for line in route_lines(&self.routes) {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    fn show_students(&mut self) -> Result<()> {
        writeln!(self.output, "\n{}", self.palette.heading("Students:"))?;
        for line in student_lines(&self.students) {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    fn add_route(&mut self) -> Result<()> {
        let Some(name) = self.prompt_parsed("Route name: ", |raw| parse_name(raw, "Route name"))?
        else {
            return Ok(());
        };
        let Some(distance_km) =
            self.prompt_parsed("Distance (km): ", |raw| parse_amount(raw, "Distance"))?
        else {
            return Ok(());
        };
        let Some(rate_per_km) =
            self.prompt_parsed("Rate per km: ", |raw| parse_amount(raw, "Rate"))?
        else {
            return Ok(());
        };

        match self.routes.add_route(&name, distance_km, rate_per_km) {
            Ok(id) => writeln!(self.output, "Added route with ID {id}")?,
            Err(err) => self.fail(format!("Could not add route: {err}"))?,
        }
        Ok(())
    }

    fn remove_route(&mut self) -> Result<()> {
        let Some(id) =
            self.prompt_parsed("Route ID to remove: ", |raw| parse_id(raw, "Route ID"))?
        else {
            return Ok(());
        };
        match self.routes.remove(id) {
            Some(route) => writeln!(self.output, "Removed route {} ({}).", route.id, route.name)?,
            None => self.fail(format!("No route with ID {id}."))?,
        }
        Ok(())
    }

    fn add_student(&mut self) -> Result<()> {
        let Some(name) =
            self.prompt_parsed("Student name: ", |raw| parse_name(raw, "Student name"))?
        else {
            return Ok(());
        };
        self.show_routes()?;
        let Some(route_id) = self.prompt_parsed("Assign route ID (0 for none): ", |raw| {
            parse_id(raw, "Route ID")
        })?
        else {
            return Ok(());
        };

        match self.students.add_student(&name, route_id) {
            Ok(id) => {
                writeln!(self.output, "Added student with ID {id}")?;
                let dangling = self.students.get(id).is_some_and(|student| {
                    student.has_route() && self.routes.get(student.route_id).is_none()
                });
                if dangling {
                    let note = format!("No route with ID {route_id}; this student is billed 0.00.");
                    writeln!(self.output, "{}", self.palette.caution(note))?;
                }
            }
            Err(err) => self.fail(format!("Could not add student: {err}"))?,
        }
        Ok(())
    }

    fn remove_student(&mut self) -> Result<()> {
        let Some(id) =
            self.prompt_parsed("Student ID to remove: ", |raw| parse_id(raw, "Student ID"))?
        else {
            return Ok(());
        };
        match self.students.remove(id) {
            Some(student) => writeln!(
                self.output,
                "Removed student {} ({}).",
                student.id, student.name
            )?,
            None => self.fail(format!("No student with ID {id}."))?,
        }
        Ok(())
    }

    fn fee_slip(&mut self) -> Result<()> {
        let Some(id) = self.prompt_parsed("Student ID: ", |raw| parse_id(raw, "Student ID"))?
        else {
            return Ok(());
        };
        let Some(student) = self.students.get(id).cloned() else {
            return self.fail("Student not found.");
        };

        let fee = calculate_fee(&student, &self.routes);
        writeln!(
            self.output,
            "Fee for {} (ID {}): {fee:.2}",
            student.name, student.id
        )?;

        let receipts = self.config.receipts_path();
        match generate_fee_slip(&student, &self.routes, &receipts) {
            Ok(_) => writeln!(self.output, "Fee slip appended to {}", receipts.display())?,
            Err(err) => self.fail(format!("Failed to write fee slip: {err}"))?,
        }
        Ok(())
    }

    fn summary(&mut self) -> Result<()> {
        writeln!(self.output, "\n{}", self.palette.heading("Summary report:"))?;
        for line in summary_lines(&summarize(&self.students, &self.routes)) {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        match self.save_all() {
            Ok(()) => writeln!(self.output, "Saved.")?,
            Err(err) => self.fail(format!("Save failed: {}", surface_error(&err)))?,
        }
        Ok(())
    }

    fn fail<D: Display>(&mut self, message: D) -> Result<()> {
        writeln!(self.output, "{}", self.palette.failure(message))?;
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        write!(self.output, "\nPress Enter to continue...")?;
        self.output.flush().context("failed to flush console")?;
        self.read_line()?;
        Ok(())
    }

    /// Prompt until `parse` accepts the answer. `None` if input ends first.
    fn prompt_parsed<T>(
        &mut self,
        label: &str,
        parse: impl Fn(&str) -> Result<T>,
    ) -> Result<Option<T>> {
        loop {
            write!(self.output, "{label}")?;
            self.output.flush().context("failed to flush console")?;
            let Some(raw) = self.read_line()? else {
                writeln!(self.output)?;
                return Ok(None);
            };
            match parse(&raw) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => self.fail(surface_error(&err))?,
            }
        }
    }
}
