/// Generates a client method that sends a request variant with a oneshot
/// reply channel and waits for the answer, inside a tracing span.
///
/// Parameter names must match the variant's field names.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident, Error = $error_type:ident) => {
        impl $client {
            #[tracing::instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $error_type> {
                tracing::debug!("Sending request");
                let (respond_to, response) = tokio::sync::oneshot::channel();
                self.sender
                    .send($request::$variant {
                        $($param,)*
                        respond_to,
                    })
                    .await
                    .map_err(|_| $error_type::ActorCommunication("Actor closed".to_string()))?;

                response
                    .await
                    .map_err(|_| $error_type::ActorCommunication("Actor dropped".to_string()))?
            }
        }
    };
}

pub(crate) use client_method;
