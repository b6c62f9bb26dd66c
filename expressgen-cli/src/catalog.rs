//! Optional Express middleware offered during project setup.

use crate::error::Result;
use crate::prompt::Prompter;

#[derive(Debug, PartialEq, Eq)]
pub struct MiddlewareOption {
    /// npm package name.
    pub id: &'static str,
    pub description: &'static str,
    pub import_line: &'static str,
    /// `app.use(...)` line, when the package is wired globally.
    pub use_line: Option<&'static str>,
    pub dev_dependency: bool,
}

pub static MIDDLEWARE: &[MiddlewareOption] = &[
    MiddlewareOption {
        id: "cors",
        description: "Enables Cross-Origin Resource Sharing (CORS)",
        import_line: "const cors = require('cors');",
        use_line: Some("app.use(cors());"),
        dev_dependency: false,
    },
    MiddlewareOption {
        id: "helmet",
        description: "Sets various HTTP headers to secure the app",
        import_line: "const helmet = require('helmet');",
        use_line: Some("app.use(helmet());"),
        dev_dependency: false,
    },
    MiddlewareOption {
        id: "morgan",
        description: "HTTP request logger",
        import_line: "const morgan = require('morgan');",
        use_line: Some("app.use(morgan('dev'));"),
        dev_dependency: false,
    },
    MiddlewareOption {
        id: "express-rate-limit",
        description: "Limits repeated requests to public APIs",
        import_line: "const rateLimit = require('express-rate-limit');",
        use_line: Some("app.use(rateLimit({ windowMs: 15 * 60 * 1000, max: 100 }));"),
        dev_dependency: false,
    },
    MiddlewareOption {
        id: "body-parser",
        description: "Parses incoming request bodies",
        import_line: "const bodyParser = require('body-parser');",
        use_line: Some("app.use(bodyParser.urlencoded({ extended: true }));"),
        dev_dependency: false,
    },
    MiddlewareOption {
        id: "compression",
        description: "Compresses response bodies",
        import_line: "const compression = require('compression');",
        use_line: Some("app.use(compression());"),
        dev_dependency: false,
    },
    MiddlewareOption {
        id: "cookie-parser",
        description: "Parses the Cookie header into req.cookies",
        import_line: "const cookieParser = require('cookie-parser');",
        use_line: Some("app.use(cookieParser());"),
        dev_dependency: false,
    },
    MiddlewareOption {
        id: "express-session",
        description: "Session handling",
        import_line: "const session = require('express-session');",
        use_line: Some(
            "app.use(session({ secret: process.env.JWT_SECRET, resave: false, saveUninitialized: true }));",
        ),
        dev_dependency: false,
    },
    MiddlewareOption {
        id: "passport",
        description: "Authentication middleware",
        import_line: "const passport = require('passport');",
        use_line: Some("app.use(passport.initialize());"),
        dev_dependency: false,
    },
    MiddlewareOption {
        id: "express-validator",
        description: "Request validation helpers for route handlers",
        import_line: "const { body, validationResult } = require('express-validator');",
        use_line: None,
        dev_dependency: false,
    },
    MiddlewareOption {
        id: "multer",
        description: "Handles multipart/form-data uploads",
        import_line: "const multer = require('multer');",
        use_line: Some("app.use(multer({ dest: 'uploads/' }).single('file'));"),
        dev_dependency: false,
    },
    MiddlewareOption {
        id: "swagger-ui-express",
        description: "Serves Swagger API documentation at /api-docs",
        import_line: "const swaggerUi = require('swagger-ui-express');",
        use_line: Some(
            "app.use('/api-docs', swaggerUi.serve, swaggerUi.setup({ openapi: '3.0.0', info: { title: 'API', version: '1.0.0' }, paths: {} }));",
        ),
        dev_dependency: false,
    },
];

/// Ask about each catalog entry in turn and return the accepted ones, in catalog order.
pub fn select(prompter: &mut dyn Prompter) -> Result<Vec<&'static MiddlewareOption>> {
    let mut selected = Vec::new();
    for option in MIDDLEWARE {
        let include =
            prompter.confirm(&format!("Add {}? ({})", option.id, option.description), false)?;
        if include {
            selected.push(option);
        }
    }
    Ok(selected)
}

/// Package names split into `(dependencies, dev_dependencies)`.
pub fn packages(selected: &[&MiddlewareOption]) -> (Vec<&'static str>, Vec<&'static str>) {
    let (dev, runtime): (Vec<&MiddlewareOption>, Vec<&MiddlewareOption>) =
        selected.iter().copied().partition(|mw| mw.dev_dependency);
    (
        runtime.iter().map(|mw| mw.id).collect(),
        dev.iter().map(|mw| mw.id).collect(),
    )
}
