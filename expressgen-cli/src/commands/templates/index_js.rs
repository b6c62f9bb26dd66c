use super::Artifact;
use crate::catalog::MiddlewareOption;
use crate::naming::EXT;
use crate::patcher::{IMPORT_END, IMPORT_START, ROUTES_ANCHOR};
use crate::schema::Backend;

pub fn path() -> String {
    format!("index.{EXT}")
}

/// The entrypoint as first written, with both patch anchors in place.
pub fn render(backend: Option<Backend>, middleware: &[&MiddlewareOption]) -> Artifact {
    let mut imports = String::new();
    for mw in middleware {
        imports.push_str(mw.import_line);
        imports.push('\n');
    }

    let mut uses = String::new();
    for line in middleware.iter().filter_map(|mw| mw.use_line) {
        uses.push_str(line);
        uses.push('\n');
    }

    let (db_import, db_connect) = match backend {
        Some(Backend::Document) => (
            "const connectDB = require('./db/connect');\n",
            "    await connectDB(process.env.MONGO_URL);\n    console.log('MongoDB connection established.');\n",
        ),
        Some(Backend::Relational) => (
            "const { connectDB } = require('./db/connect');\n",
            "    await connectDB();\n    console.log('PostgreSQL connection established.');\n",
        ),
        None => ("", ""),
    };

    let content = format!(
        r#"require('dotenv').config();
require('express-async-errors');

const express = require('express');
{imports}{db_import}
{IMPORT_START}
{IMPORT_END}

const app = express();

{uses}app.use(express.json());

app.get('/', (req, res) => {{
  res.json({{
    message: 'Welcome to the Express API',
    timestamp: new Date().toISOString(),
  }});
}});

{ROUTES_ANCHOR}

const notFound = require('./middleware/not-found');
const errorHandler = require('./middleware/error-handler');

app.use(notFound);
app.use(errorHandler);

const port = process.env.PORT || 5000;

const start = async () => {{
  try {{
{db_connect}    app.listen(port, () => {{
      console.log(`Server is listening on port ${{port}}...`);
      console.log(`Environment: ${{process.env.NODE_ENV || 'development'}}`);
    }});
  }} catch (error) {{
    console.error('Failed to start server:', error);
    process.exit(1);
  }}
}};

start();
"#
    );

    Artifact::new(path(), content)
}
