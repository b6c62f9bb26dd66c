use super::Artifact;

/// The fixed `middleware/` files every project gets.
pub fn artifacts() -> Vec<Artifact> {
    vec![
        Artifact::new("middleware/not-found.js", NOT_FOUND),
        Artifact::new("middleware/error-handler.js", ERROR_HANDLER),
    ]
}

const NOT_FOUND: &str = r#"const { StatusCodes } = require('http-status-codes');

const notFound = (req, res) => {
  res.status(StatusCodes.NOT_FOUND).json({
    error: 'Route Not Found',
    path: req.path,
  });
};

module.exports = notFound;
"#;

const ERROR_HANDLER: &str = r#"const { StatusCodes } = require('http-status-codes');

const errorHandlerMiddleware = (err, req, res, next) => {
  console.error(err);

  const customError = {
    statusCode: err.statusCode || StatusCodes.INTERNAL_SERVER_ERROR,
    message: err.message || 'Something went wrong, please try again later',
  };

  // Mongoose and Sequelize validation failures
  if (err.name === 'ValidationError') {
    customError.message = Object.values(err.errors)
      .map((item) => item.message)
      .join(', ');
    customError.statusCode = StatusCodes.BAD_REQUEST;
  }
  if (err.name === 'SequelizeValidationError') {
    customError.message = err.errors.map((item) => item.message).join(', ');
    customError.statusCode = StatusCodes.BAD_REQUEST;
  }

  // Duplicate key
  if (err.code === 11000) {
    customError.message = `Duplicate value for ${Object.keys(err.keyValue)} field`;
    customError.statusCode = StatusCodes.CONFLICT;
  }
  if (err.name === 'SequelizeUniqueConstraintError') {
    customError.message = `Duplicate value for ${Object.keys(err.fields || {})} field`;
    customError.statusCode = StatusCodes.CONFLICT;
  }

  return res.status(customError.statusCode).json({
    error: customError.message,
    ...(process.env.NODE_ENV === 'development' && { stack: err.stack }),
  });
};

module.exports = errorHandlerMiddleware;
"#;
