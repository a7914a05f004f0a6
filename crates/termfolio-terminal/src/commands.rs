//! Built-in portfolio commands.

use termfolio_types::error::{Result, TermfolioError};

use crate::interpreter::{ArgCompletion, Command, CommandOutput, CommandTable, Environment};
use crate::output::LineStyle;

/// Register all built-in commands into a table.
///
/// Registration order is the order `help` lists commands and the order
/// Tab offers them.
pub fn register_builtins(table: &mut CommandTable) {
    table.register(Box::new(HelpCmd));
    table.register(Box::new(LsCmd));
    table.register(Box::new(AboutCmd));
    table.register(Box::new(ExperienceCmd));
    table.register(Box::new(InvolvementCmd));
    table.register(Box::new(EducationCmd));
    table.register(Box::new(SoundCmd));
    table.register(Box::new(OpenCmd));
    table.register(Box::new(ClearCmd));
    table.register(Box::new(ResumeCmd));
    table.register(Box::new(ContactCmd));
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn description(&self) -> &str {
        "Show this help message"
    }
    fn usage(&self) -> &str {
        "help"
    }
    fn execute(&self, _args: &str, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let mut out = CommandOutput::new();
        out.system("Available commands:");
        for cmd in env.table.iter() {
            out.line(format!("  {:<15}{}", cmd.usage(), cmd.description()));
        }
        Ok(out)
    }
}

// ---------------------------------------------------------------------------
// ls
// ---------------------------------------------------------------------------

/// Listing size floor, and bytes per description character above it.
const MIN_LISTING_SIZE: usize = 128;
const BYTES_PER_CHAR: usize = 6;

struct LsCmd;
impl Command for LsCmd {
    fn name(&self) -> &str {
        "ls"
    }
    fn description(&self) -> &str {
        "List projects (simple | detailed)"
    }
    fn usage(&self) -> &str {
        "ls | ls -al"
    }
    fn completion(&self) -> ArgCompletion {
        ArgCompletion::Literals(&["-al", "-la", "-a", "-l"])
    }
    fn execute(&self, args: &str, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let mut out = CommandOutput::new();
        let projects = &env.content.projects;
        if !(args.contains("-a") || args.contains("-l")) {
            for p in projects {
                out.line(format!("{}  - {}", p.id, p.title));
            }
            return Ok(out);
        }

        let mtime = env.clock.now()?.listing_format();
        out.system(format!("total {}", projects.len() * 4));
        for p in projects {
            let size = MIN_LISTING_SIZE.max(p.description.chars().count() * BYTES_PER_CHAR);
            out.line(format!(
                "-rw-r--r-- 1 {} {} {size:>6} {mtime} {}  - {}",
                env.config.owner, env.config.group, p.id, p.title
            ));
        }
        Ok(out)
    }
}

// ---------------------------------------------------------------------------
// about
// ---------------------------------------------------------------------------

struct AboutCmd;
impl Command for AboutCmd {
    fn name(&self) -> &str {
        "about"
    }
    fn description(&self) -> &str {
        "About me"
    }
    fn usage(&self) -> &str {
        "about"
    }
    fn execute(&self, _args: &str, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let about = &env.content.about;
        let mut out = CommandOutput::new();
        out.typed(
            about.summary.as_str(),
            LineStyle::System,
            env.config.typing_speed_ms,
        );
        if !about.skills.is_empty() {
            out.line(format!("Skills: {}", about.skills.join(", ")));
        }
        out.line(r#"Type "ls | ls -al" to see projects or "help" for commands."#);
        Ok(out)
    }
}

// ---------------------------------------------------------------------------
// experience / involvement / education / resume
// ---------------------------------------------------------------------------

struct ExperienceCmd;
impl Command for ExperienceCmd {
    fn name(&self) -> &str {
        "experience"
    }
    fn description(&self) -> &str {
        "Show work experience"
    }
    fn usage(&self) -> &str {
        "experience"
    }
    fn execute(&self, _args: &str, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let mut out = CommandOutput::new();
        out.system("Work Experience:");
        for e in &env.content.experiences {
            out.line(format!("{} — {} ({})", e.company, e.title, e.period));
            for b in &e.bullets {
                out.line(format!("  - {b}"));
            }
        }
        Ok(out)
    }
}

struct InvolvementCmd;
impl Command for InvolvementCmd {
    fn name(&self) -> &str {
        "involvement"
    }
    fn description(&self) -> &str {
        "Show community involvement"
    }
    fn usage(&self) -> &str {
        "involvement"
    }
    fn execute(&self, _args: &str, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let mut out = CommandOutput::new();
        out.system("Involvement:");
        for i in &env.content.involvement {
            out.line(format!("{} — {}", i.org, i.role));
            out.line(format!("  {}", i.details));
            if let Some(url) = &i.url {
                out.link("  Link:", url);
            }
        }
        Ok(out)
    }
}

struct EducationCmd;
impl Command for EducationCmd {
    fn name(&self) -> &str {
        "education"
    }
    fn description(&self) -> &str {
        "Show university / education info"
    }
    fn usage(&self) -> &str {
        "education"
    }
    fn execute(&self, _args: &str, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let mut out = CommandOutput::new();
        out.system("Education:");
        for ed in &env.content.education {
            out.line(format!("{} — {} ({})", ed.school, ed.degree, ed.period));
            if let Some(notes) = &ed.notes {
                out.line(format!("  {notes}"));
            }
        }
        Ok(out)
    }
}

struct ResumeCmd;
impl Command for ResumeCmd {
    fn name(&self) -> &str {
        "resume"
    }
    fn description(&self) -> &str {
        "Show experience and education"
    }
    fn usage(&self) -> &str {
        "resume"
    }
    fn execute(&self, args: &str, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let mut out = ExperienceCmd.execute(args, env)?;
        out.extend(EducationCmd.execute(args, env)?);
        Ok(out)
    }
}

// ---------------------------------------------------------------------------
// sound
// ---------------------------------------------------------------------------

const SOUND_USAGE: &str = "Usage: sound on|off";

struct SoundCmd;
impl Command for SoundCmd {
    fn name(&self) -> &str {
        "sound"
    }
    fn description(&self) -> &str {
        "Enable or disable typing sounds"
    }
    fn usage(&self) -> &str {
        "sound on|off"
    }
    fn completion(&self) -> ArgCompletion {
        ArgCompletion::Literals(&["on", "off"])
    }
    fn execute(&self, args: &str, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let mut out = CommandOutput::new();
        match args.trim().to_lowercase().as_str() {
            "on" => {
                *env.sound_enabled = true;
                out.line("Sound: ON");
            },
            "off" => {
                *env.sound_enabled = false;
                out.line("Sound: OFF");
            },
            _ => return Err(TermfolioError::Usage(SOUND_USAGE.to_string())),
        }
        Ok(out)
    }
}

// ---------------------------------------------------------------------------
// open
// ---------------------------------------------------------------------------

struct OpenCmd;
impl Command for OpenCmd {
    fn name(&self) -> &str {
        "open"
    }
    fn description(&self) -> &str {
        "Open project by id (e.g. open project1)"
    }
    fn usage(&self) -> &str {
        "open <project>"
    }
    fn completion(&self) -> ArgCompletion {
        ArgCompletion::ProjectIds
    }
    fn execute(&self, args: &str, env: &mut Environment<'_>) -> Result<CommandOutput> {
        if args.is_empty() {
            return Err(TermfolioError::Usage(
                r#"Usage: open <project-id>  (try "ls" to see ids)"#.to_string(),
            ));
        }
        let id = args.to_lowercase();
        let project = env
            .content
            .find_project(&id)
            .ok_or_else(|| TermfolioError::ProjectNotFound(id.clone()))?;
        let mut out = CommandOutput::new();
        out.system(project.title.as_str())
            .line(project.description.as_str())
            .link("Repo:", &project.repo)
            .link("Demo:", &project.demo);
        Ok(out)
    }
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clear the screen"
    }
    fn usage(&self) -> &str {
        "clear"
    }
    fn execute(&self, _args: &str, _env: &mut Environment<'_>) -> Result<CommandOutput> {
        let mut out = CommandOutput::new();
        out.clear();
        Ok(out)
    }
}

// ---------------------------------------------------------------------------
// contact
// ---------------------------------------------------------------------------

struct ContactCmd;
impl Command for ContactCmd {
    fn name(&self) -> &str {
        "contact"
    }
    fn description(&self) -> &str {
        "Show contact and profile links"
    }
    fn usage(&self) -> &str {
        "contact"
    }
    fn execute(&self, _args: &str, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let contact = &env.content.contact;
        let mut out = CommandOutput::new();
        out.system("Contact:");
        if let Some(email) = &contact.email {
            out.line(format!("Email: {email}"));
        }
        if let Some(repo) = &contact.repo {
            out.link("Source:", repo);
        }
        for link in &contact.links {
            out.link(&format!("{}:", link.label), &link.url);
        }
        Ok(out)
    }
}
