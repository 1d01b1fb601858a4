use fractic_server_error::{define_client_error, define_internal_error};

// IO-related.
define_client_error!(ReadError, "Error reading file.");

// Configuration-related.
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(InvalidConfig, "Invalid configuration: {details}.", { details: &str });

// Parsing-related.
define_client_error!(InvalidPaymentAmount, "Invalid payment amount: '{value}'.", { value: &str });
define_client_error!(
    MalformedQueryArgument,
    "Invalid {kind} argument: '{value}'.",
    { kind: &str, value: &str }
);

// Storage-related.
define_internal_error!(
    StorageFailure,
    "Payment store operation '{operation}' failed.",
    { operation: &str }
);
define_internal_error!(
    CorruptPaymentRow,
    "Stored payment {id} could not be read: {details}.",
    { id: i64, details: &str }
);

// Delivery-related.
define_client_error!(
    DeliveryFailure,
    "Failed to deliver message to chat {chat_id}.",
    { chat_id: i64 }
);
