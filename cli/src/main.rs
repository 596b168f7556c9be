mod backend;
mod storage;


use std::path::PathBuf;
use std::sync::Arc;

use api::config::DEFAULT_API_URL;
use api::models::persona::PersonaUpdate;
use api::models::product::{ProductDraft, ProductFilters, ProductType, SortOrder};
use api::models::schedule::{Frequency, NewSchedule, SchedulePatch, SourceType};
use api::services::{articles, personas, products, schedules, tools};
use api::{ApiConfig, ApiError, AuthError, AuthSession, Navigator, SessionStore, TokenStore, Transport};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

use crate::backend::{ReqwestBackend, TerminalNavigator};
use crate::storage::{DEFAULT_SESSION_FILE, FileStorage};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("not logged in; run `market-cli login` first")]
    NotLoggedIn,
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "market-cli", about = "Workflow marketplace and bot dashboard CLI")]
struct Cli {
    #[arg(long, env = "MARKETPLACE_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    #[arg(long, env = "MARKETPLACE_SESSION_FILE", default_value = DEFAULT_SESSION_FILE)]
    session_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in with email and password.
    Login(CredentialArgs),
    /// Create an account and sign in.
    Register(CredentialArgs),
    /// Finish a Google sign-in with the authorization code from the callback URL.
    Oauth {
        #[arg(long)]
        code: String,
    },
    Logout,
    /// Show the signed-in user and their landing route.
    Whoami,
    Products(ProductCommand),
    Articles(ArticleCommand),
    Tools(ToolCommand),
    Schedules(ScheduleCommand),
    Persona(PersonaCommand),
}

#[derive(Args, Debug)]
struct CredentialArgs {
    #[arg(long)]
    email: String,

    #[arg(long, env = "MARKETPLACE_PASSWORD", hide_env_values = true)]
    password: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ProductKind {
    Workflow,
    Tool,
    Integration,
}

impl From<ProductKind> for ProductType {
    fn from(kind: ProductKind) -> Self {
        match kind {
            ProductKind::Workflow => Self::Workflow,
            ProductKind::Tool => Self::Tool,
            ProductKind::Integration => Self::Integration,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SortDirection {
    Asc,
    Desc,
}

#[derive(Args, Debug)]
struct ProductCommand {
    #[command(subcommand)]
    command: ProductSubcommand,
}

#[derive(Subcommand, Debug)]
enum ProductSubcommand {
    List(ProductListArgs),
    Featured {
        #[arg(long, default_value_t = products::DEFAULT_FEATURED_LIMIT)]
        limit: u32,
    },
    Get {
        id: String,
        /// Read through the seller route, which also returns drafts.
        #[arg(long)]
        mine: bool,
    },
    /// List your own products.
    Mine {
        #[arg(long)]
        published_only: bool,
    },
    Create(ProductCreateArgs),
    Publish {
        id: String,
    },
    Unpublish {
        id: String,
    },
    Delete {
        id: String,
    },
    /// Record a download of the product.
    Download {
        id: String,
    },
}

#[derive(Args, Debug, Default)]
struct ProductListArgs {
    #[arg(long = "type", value_enum)]
    product_type: Option<ProductKind>,
    #[arg(long)]
    search: Option<String>,
    #[arg(long = "tag")]
    tags: Vec<String>,
    #[arg(long)]
    limit: Option<u32>,
    #[arg(long)]
    offset: Option<u32>,
    #[arg(long)]
    sort_by: Option<String>,
    #[arg(long, value_enum)]
    sort_order: Option<SortDirection>,
}

impl ProductListArgs {
    fn filters(&self) -> ProductFilters {
        ProductFilters {
            product_type: self.product_type.map(ProductType::from),
            search: self.search.clone(),
            tags: self.tags.clone(),
            limit: self.limit,
            offset: self.offset,
            sort_by: self.sort_by.clone(),
            sort_order: self.sort_order.map(|d| match d {
                SortDirection::Asc => SortOrder::Asc,
                SortDirection::Desc => SortOrder::Desc,
            }),
        }
    }
}

#[derive(Args, Debug)]
struct ProductCreateArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    description: String,
    #[arg(long = "type", value_enum, default_value = "workflow")]
    product_type: ProductKind,
    /// Price for a paid product; omit for a free one.
    #[arg(long)]
    price: Option<f64>,
    #[arg(long = "tag")]
    tags: Vec<String>,
    #[arg(long)]
    workflow_file_url: Option<String>,
    #[arg(long)]
    thumbnail_url: Option<String>,
    /// Publish right after creating; requires a complete listing.
    #[arg(long)]
    publish: bool,
}

impl ProductCreateArgs {
    fn draft(&self) -> ProductDraft {
        ProductDraft {
            title: self.title.trim().to_owned(),
            description: self.description.trim().to_owned(),
            product_type: self.product_type.into(),
            tags: self.tags.clone(),
            is_free: self.price.is_none(),
            price: self.price,
            workflow_file_url: self.workflow_file_url.clone(),
            thumbnail_url: self.thumbnail_url.clone(),
            ..ProductDraft::default()
        }
    }
}

#[derive(Args, Debug)]
struct ArticleCommand {
    #[command(subcommand)]
    command: ArticleSubcommand,
}

#[derive(Subcommand, Debug)]
enum ArticleSubcommand {
    List,
    /// Queue an article URL for summarization.
    Submit {
        url: String,
    },
    Delete {
        id: String,
    },
}

#[derive(Args, Debug)]
struct ToolCommand {
    #[command(subcommand)]
    command: ToolSubcommand,
}

#[derive(Subcommand, Debug)]
enum ToolSubcommand {
    List,
    /// Ask for a custom tool described in free text.
    Request {
        description: String,
    },
}

#[derive(Args, Debug)]
struct ScheduleCommand {
    #[command(subcommand)]
    command: ScheduleSubcommand,
}

#[derive(Subcommand, Debug)]
enum ScheduleSubcommand {
    List,
    Create {
        #[arg(long, default_value = "url")]
        source_type: SourceType,
        #[arg(long)]
        source_value: String,
        #[arg(long, default_value = "daily")]
        frequency: Frequency,
    },
    Update {
        id: String,
        #[arg(long)]
        frequency: Option<Frequency>,
        #[arg(long)]
        active: Option<bool>,
    },
    Delete {
        id: String,
    },
}

#[derive(Args, Debug)]
struct PersonaCommand {
    #[command(subcommand)]
    command: PersonaSubcommand,
}

#[derive(Subcommand, Debug)]
enum PersonaSubcommand {
    Show,
    Set {
        #[arg(long)]
        language_style: Option<String>,
        #[arg(long)]
        tone: Option<String>,
        #[arg(long = "topic")]
        topics: Vec<String>,
    },
}

type Session = AuthSession<ReqwestBackend>;

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let session = connect(&cli)?;

    match cli.command {
        Command::Login(args) => {
            let user = session.login(&args.email, &args.password).await?;
            println!("logged in as {} -> {}", user.email, session.redirect_route());
            Ok(())
        }
        Command::Register(args) => {
            let user = session.register(&args.email, &args.password).await?;
            println!("registered {} -> {}", user.email, session.redirect_route());
            Ok(())
        }
        Command::Oauth { code } => {
            let user = session.complete_oauth(&code).await?;
            println!("logged in as {} -> {}", user.email, session.redirect_route());
            Ok(())
        }
        Command::Logout => {
            session.logout();
            println!("logged out");
            Ok(())
        }
        Command::Whoami => run_whoami(&session).await,
        Command::Products(cmd) => run_products(&session, cmd).await,
        Command::Articles(cmd) => run_articles(&session, cmd).await,
        Command::Tools(cmd) => run_tools(&session, cmd).await,
        Command::Schedules(cmd) => run_schedules(&session, cmd).await,
        Command::Persona(cmd) => run_persona(&session, cmd).await,
    }
}

fn connect(cli: &Cli) -> Result<Session, CliError> {
    tracing::debug!(api_url = %cli.api_url, session_file = %cli.session_file.display(), "starting");
    let store: Arc<dyn SessionStore> = Arc::new(TokenStore::new(FileStorage::new(&cli.session_file)));
    let navigator: Arc<dyn Navigator> = Arc::new(TerminalNavigator);
    let transport = Transport::new(ApiConfig::new(&cli.api_url), ReqwestBackend::new()?, store, navigator);
    Ok(AuthSession::new(transport))
}

fn require_login(session: &Session) -> Result<(), CliError> {
    if session.transport().store().get().is_none() {
        return Err(CliError::NotLoggedIn);
    }
    Ok(())
}

async fn run_whoami(session: &Session) -> Result<(), CliError> {
    require_login(session)?;
    session.init().await;
    let Some(user) = session.user() else {
        return Err(CliError::NotLoggedIn);
    };
    print_json(&user)?;
    println!("landing route: {}", session.redirect_route());
    Ok(())
}

async fn run_products(session: &Session, cmd: ProductCommand) -> Result<(), CliError> {
    let t = session.transport();
    match cmd.command {
        ProductSubcommand::List(args) => print_json(&products::list(t, &args.filters()).await?),
        ProductSubcommand::Featured { limit } => print_json(&products::featured(t, limit).await?),
        ProductSubcommand::Get { id, mine: false } => print_json(&products::get(t, &id).await?),
        ProductSubcommand::Get { id, mine: true } => {
            require_login(session)?;
            print_json(&products::get_mine(t, &id).await?)
        }
        ProductSubcommand::Mine { published_only } => {
            require_login(session)?;
            print_json(&products::list_mine(t, !published_only).await?)
        }
        ProductSubcommand::Create(args) => {
            require_login(session)?;
            let draft = args.draft();
            draft.validate(args.publish).map_err(|errors| CliError::Invalid(describe_field_errors(&errors)))?;
            if args.publish {
                let missing = draft.missing_fields();
                if !missing.is_empty() {
                    return Err(CliError::Invalid(format!("cannot publish; missing {}", missing.join(", "))));
                }
            }
            let created = products::create(t, &draft).await?;
            let product = if args.publish { products::publish(t, &created.id).await? } else { created };
            print_json(&product)
        }
        ProductSubcommand::Publish { id } => print_json(&products::publish(t, &id).await?),
        ProductSubcommand::Unpublish { id } => print_json(&products::unpublish(t, &id).await?),
        ProductSubcommand::Delete { id } => {
            products::delete(t, &id).await?;
            println!("deleted {id}");
            Ok(())
        }
        ProductSubcommand::Download { id } => {
            products::record_download(t, &id).await?;
            println!("recorded download of {id}");
            Ok(())
        }
    }
}

async fn run_articles(session: &Session, cmd: ArticleCommand) -> Result<(), CliError> {
    require_login(session)?;
    let t = session.transport();
    match cmd.command {
        ArticleSubcommand::List => print_json(&articles::list(t).await?),
        ArticleSubcommand::Submit { url } => print_json(&articles::submit(t, &url).await?),
        ArticleSubcommand::Delete { id } => {
            articles::delete(t, &id).await?;
            println!("deleted {id}");
            Ok(())
        }
    }
}

async fn run_tools(session: &Session, cmd: ToolCommand) -> Result<(), CliError> {
    require_login(session)?;
    let t = session.transport();
    match cmd.command {
        ToolSubcommand::List => print_json(&tools::list(t).await?),
        ToolSubcommand::Request { description } => {
            if description.trim().is_empty() {
                return Err(CliError::Invalid("describe the tool you need".to_owned()));
            }
            print_json(&tools::request(t, description.trim()).await?)
        }
    }
}

async fn run_schedules(session: &Session, cmd: ScheduleCommand) -> Result<(), CliError> {
    require_login(session)?;
    let t = session.transport();
    match cmd.command {
        ScheduleSubcommand::List => print_json(&schedules::list(t).await?),
        ScheduleSubcommand::Create { source_type, source_value, frequency } => {
            let input = NewSchedule { source_type, source_value: source_value.trim().to_owned(), frequency };
            input.validate().map_err(CliError::Invalid)?;
            print_json(&schedules::create(t, &input).await?)
        }
        ScheduleSubcommand::Update { id, frequency, active } => {
            let patch = SchedulePatch { frequency, active, ..SchedulePatch::default() };
            print_json(&schedules::update(t, &id, &patch).await?)
        }
        ScheduleSubcommand::Delete { id } => {
            schedules::delete(t, &id).await?;
            println!("deleted {id}");
            Ok(())
        }
    }
}

async fn run_persona(session: &Session, cmd: PersonaCommand) -> Result<(), CliError> {
    require_login(session)?;
    let t = session.transport();
    match cmd.command {
        PersonaSubcommand::Show => print_json(&personas::get(t).await?),
        PersonaSubcommand::Set { language_style, tone, topics } => {
            let update = PersonaUpdate {
                language_style,
                tone,
                topics_interest: if topics.is_empty() { None } else { Some(topics) },
            };
            print_json(&personas::update(t, &update).await?)
        }
    }
}

fn describe_field_errors(errors: &api::models::product::FieldErrors) -> String {
    errors.iter().map(|(field, message)| format!("{field}: {message}")).collect::<Vec<_>>().join("; ")
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
