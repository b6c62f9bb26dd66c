use chrono::NaiveDate;

use super::Artifact;
use super::routes::CRUD_ROUTES;
use crate::naming::ModelNames;
use crate::schema::Backend;

pub fn render(backend: Option<Backend>, models: &[ModelNames], generated_on: NaiveDate) -> Artifact {
    let database = backend.map_or("none", |b| b.label());
    let env_var = backend
        .map(|b| format!("- `{}`: {} connection string\n", b.url_env_var(), b.label()))
        .unwrap_or_default();

    let mut endpoints = String::new();
    if models.is_empty() {
        endpoints.push_str("No models were generated.\n");
    }
    for names in models {
        endpoints.push_str(&format!("\n### {}\n\n| Method | Path |\n|---|---|\n", names.pascal));
        for (method, path, _) in CRUD_ROUTES {
            let full = match path {
                "/" => names.mount_path(),
                _ => format!("{}{}", names.mount_path(), path),
            };
            endpoints.push_str(&format!("| {} | `{}` |\n", method.to_uppercase(), full));
        }
    }

    let content = format!(
        r#"# Express.js API

Generated by expressgen on {generated_on}. Database: {database}.

## Project Structure

```
controllers/   request handlers, one file per model
models/        {database} models
routes/        routers mounted from index.js
middleware/    not-found and error handler
errors/        HTTP error classes
db/            database connection
index.js       application entry point
.env           environment variables
```

## Getting Started

```
npm install
npm run dev    # nodemon
npm start
```

## Environment Variables

- `PORT`: server port (default 5000)
- `JWT_SECRET`, `JWT_LIFETIME`: token settings
{env_var}
## API Endpoints
{endpoints}"#
    );

    Artifact::new("README.md", content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readme_lists_each_model_endpoint() {
        let models = vec![
            ModelNames::derive("Post").unwrap(),
            ModelNames::derive("Comment").unwrap(),
        ];
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let content = render(Some(Backend::Document), &models, date).content;

        assert!(content.contains("Generated by expressgen on 2026-10-16. Database: MongoDB."));
        assert!(content.contains("`MONGO_URL`"));
        assert!(content.contains("| POST | `/api/v1/posts` |"));
        assert!(content.contains("| PATCH | `/api/v1/comments/:id` |"));
        assert_eq!(content.matches("| DELETE |").count(), 2);
    }

    #[test]
    fn test_readme_without_models() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let content = render(None, &[], date).content;
        assert!(content.contains("Database: none."));
        assert!(content.contains("No models were generated."));
    }
}
