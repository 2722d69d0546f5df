use prometheus_client::metrics::{counter::Counter, family::Family, histogram::Histogram};
use prometheus_client::registry::Registry;
use prometheus_client_derive_encode::{EncodeLabelSet, EncodeLabelValue};

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Status {
    Success,
    Error,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct Labels {
    pub method: Method,
    pub status: Status,
}

/// Per-service request counter and latency histogram.
///
/// Families are reference counted, so clones share the same series.
#[derive(Clone, Debug)]
pub struct Metrics {
    pub request_counter: Family<Labels, Counter>,
    pub request_duration: Family<Labels, Histogram>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            request_counter: Family::default(),
            request_duration: Family::new_with_constructor(|| {
                Histogram::new(vec![
                    0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
                ])
            }),
        }
    }

    /// Registers both families under `{service}_request_counter` and
    /// `{service}_request_duration`.
    pub fn register(&self, registry: &mut Registry, service: &str) {
        registry.register(
            format!("{service}_request_counter"),
            format!("Total number of requests to the {service}"),
            self.request_counter.clone(),
        );
        registry.register(
            format!("{service}_request_duration"),
            format!("Histogram of request durations for the {service}"),
            self.request_duration.clone(),
        );
    }

    pub fn record(&self, method: Method, status: Status, duration_secs: f64) {
        let labels = Labels { method, status };
        self.request_counter.get_or_create(&labels).inc();
        self.request_duration
            .get_or_create(&labels)
            .observe(duration_secs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prometheus_client::encoding::text::encode;

    #[test]
    fn record_increments_the_labelled_counter() {
        let metrics = Metrics::new();
        metrics.record(Method::Get, Status::Success, 0.01);
        metrics.record(Method::Get, Status::Success, 0.02);
        metrics.record(Method::Delete, Status::Error, 0.01);

        let ok = Labels {
            method: Method::Get,
            status: Status::Success,
        };
        let failed = Labels {
            method: Method::Delete,
            status: Status::Error,
        };

        assert_eq!(metrics.request_counter.get_or_create(&ok).get(), 2);
        assert_eq!(metrics.request_counter.get_or_create(&failed).get(), 1);
    }

    #[test]
    fn registered_families_are_encoded_with_service_prefix() {
        let mut registry = Registry::default();
        let metrics = Metrics::new();
        metrics.register(&mut registry, "product_query_service");
        metrics.record(Method::Get, Status::Success, 0.01);

        let mut buffer = String::new();
        encode(&mut buffer, &registry).unwrap();

        assert!(buffer.contains("product_query_service_request_counter"));
        assert!(buffer.contains("product_query_service_request_duration"));
    }
}
