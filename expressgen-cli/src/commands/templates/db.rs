use super::Artifact;
use crate::schema::Backend;

pub const PATH: &str = "db/connect.js";

/// npm packages the backend's connection module needs.
pub fn packages(backend: Backend) -> &'static [&'static str] {
    match backend {
        Backend::Document => &["mongoose"],
        Backend::Relational => &["sequelize", "pg", "pg-hstore"],
    }
}

pub fn render(backend: Backend) -> Artifact {
    let content = match backend {
        Backend::Document => {
            r#"const mongoose = require('mongoose');

const connectDB = async (url) => {
  await mongoose.connect(url);
};

module.exports = connectDB;
"#
        }
        Backend::Relational => {
            r#"const { Sequelize } = require('sequelize');

const sequelize = new Sequelize(process.env.POSTGRES_URL, {
  dialect: 'postgres',
  logging: false,
  dialectOptions: {
    ssl:
      process.env.NODE_ENV === 'production'
        ? { require: true, rejectUnauthorized: false }
        : false,
  },
});

const connectDB = async () => {
  await sequelize.authenticate();
  await sequelize.sync();
};

module.exports = { sequelize, connectDB };
"#
        }
    };
    Artifact::new(PATH, content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_module_exports() {
        let mongo = render(Backend::Document).content;
        assert!(mongo.contains("module.exports = connectDB;"));

        // Models import `{ sequelize }` and index.js imports `{ connectDB }`.
        let pg = render(Backend::Relational).content;
        assert!(pg.contains("module.exports = { sequelize, connectDB };"));
        assert!(pg.contains("process.env.POSTGRES_URL"));
    }

    #[test]
    fn test_packages() {
        assert_eq!(packages(Backend::Document), ["mongoose"]);
        assert_eq!(packages(Backend::Relational), ["sequelize", "pg", "pg-hstore"]);
    }
}
