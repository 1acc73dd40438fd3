//! CreateServiceRequestHandler - the public "bring the bill" workflow.
//!
//! A diner's phone submits the coordinates printed in the table QR code
//! together with the proof `h`. The workflow verifies the proof before any
//! storage access, checks the restaurant/branch/table chain, persists the
//! request and only then publishes exactly one `request.created`
//! notification to the restaurant's dashboards.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::foundation::{
    BranchId, DomainError, ErrorCode, RestaurantId, TableId,
};
use crate::domain::request::{RequestError, ServiceRequest};
use crate::domain::table::qr_proof;
use crate::ports::{
    BranchRepository, BroadcastMessage, NotificationPublisher, RequestRepository,
    RestaurantRepository, TableRepository,
};

/// Default bound on each storage call.
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Command carrying the raw values scanned from a table QR code.
#[derive(Debug, Clone)]
pub struct CreateServiceRequestCommand {
    pub restaurant_id: String,
    pub branch_id: String,
    pub table_id: String,
    pub table_number: i64,
    pub proof: String,
}

/// Result of a successful request creation.
#[derive(Debug, Clone)]
pub struct CreateServiceRequestResult {
    pub request: ServiceRequest,
}

/// Handler for diner-raised service requests.
pub struct CreateServiceRequestHandler {
    restaurants: Arc<dyn RestaurantRepository>,
    branches: Arc<dyn BranchRepository>,
    tables: Arc<dyn TableRepository>,
    requests: Arc<dyn RequestRepository>,
    publisher: Arc<dyn NotificationPublisher>,
    query_timeout: Duration,
}

impl CreateServiceRequestHandler {
    pub fn new(
        restaurants: Arc<dyn RestaurantRepository>,
        branches: Arc<dyn BranchRepository>,
        tables: Arc<dyn TableRepository>,
        requests: Arc<dyn RequestRepository>,
        publisher: Arc<dyn NotificationPublisher>,
    ) -> Self {
        Self {
            restaurants,
            branches,
            tables,
            requests,
            publisher,
            query_timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }

    /// Overrides the per-call storage timeout.
    pub fn with_query_timeout(mut self, query_timeout: Duration) -> Self {
        self.query_timeout = query_timeout;
        self
    }

    pub async fn handle(
        &self,
        cmd: CreateServiceRequestCommand,
    ) -> Result<CreateServiceRequestResult, RequestError> {
        // 1. Shape of the table number
        if cmd.table_number < 1 {
            return Err(RequestError::validation(
                "tableNumber",
                "table number must be greater than 0",
            ));
        }
        let table_number = u32::try_from(cmd.table_number)
            .map_err(|_| RequestError::validation("tableNumber", "table number is too large"))?;

        // 2. Capability proof, before touching storage
        if !qr_proof::verify(
            &cmd.restaurant_id,
            &cmd.branch_id,
            &cmd.table_id,
            cmd.table_number,
            &cmd.proof,
        ) {
            tracing::warn!(
                restaurant_id = %cmd.restaurant_id,
                table_id = %cmd.table_id,
                "Rejected service request with invalid QR proof"
            );
            return Err(RequestError::InvalidQrCode);
        }

        let restaurant_id = RestaurantId::new(cmd.restaurant_id)?;
        let branch_id = BranchId::new(cmd.branch_id)?;
        let table_id = TableId::new(cmd.table_id)?;

        // 3. Restaurant exists
        self.bounded(self.restaurants.find_by_id(&restaurant_id))
            .await?
            .ok_or_else(|| RequestError::RestaurantNotFound(restaurant_id.clone()))?;

        // 4. Branch belongs to the restaurant and is open
        let branch = self
            .bounded(self.branches.find_by_id(&branch_id))
            .await?
            .filter(|b| b.belongs_to(&restaurant_id))
            .ok_or_else(|| RequestError::BranchNotFound(branch_id.clone()))?;
        if !branch.is_active() {
            return Err(RequestError::BranchInactive(branch_id));
        }

        // 5. Stored table matches every claimed coordinate and is in service
        let table = self
            .bounded(self.tables.find_by_id(&table_id))
            .await?
            .filter(|t| t.belongs_to(&restaurant_id))
            .filter(|t| t.branch_id() == &branch_id && t.number() == table_number)
            .ok_or_else(|| RequestError::TableNotFound(table_id.clone()))?;
        if !table.is_active() {
            return Err(RequestError::TableInactive(table_id));
        }

        // 6. Persist
        let request = ServiceRequest::new(restaurant_id, branch_id, table_id, table_number);
        self.bounded(self.requests.save(&request)).await?;

        tracing::info!(
            restaurant_id = %request.restaurant_id(),
            request_id = %request.id(),
            table_number = request.table_number(),
            "Service request created"
        );

        // 7. Notify dashboards, exactly once and only after persistence
        self.publisher
            .publish(BroadcastMessage::request_created(&request));

        Ok(CreateServiceRequestResult { request })
    }

    async fn bounded<T, F>(&self, call: F) -> Result<T, DomainError>
    where
        F: Future<Output = Result<T, DomainError>>,
    {
        tokio::time::timeout(self.query_timeout, call)
            .await
            .map_err(|_| DomainError::new(ErrorCode::Timeout, "Storage call timed out"))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        InMemoryBranchRepository, InMemoryRequestRepository, InMemoryRestaurantRepository,
        InMemoryTableRepository,
    };
    use crate::domain::foundation::{RequestId, UserId};
    use crate::domain::restaurant::{Branch, Restaurant, RestaurantDetails};
    use crate::domain::table::Table;
    use crate::ports::NotificationEvent;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingPublisher {
        published: Mutex<Vec<BroadcastMessage>>,
    }

    impl RecordingPublisher {
        fn published(&self) -> Vec<BroadcastMessage> {
            self.published.lock().unwrap().clone()
        }
    }

    impl NotificationPublisher for RecordingPublisher {
        fn publish(&self, message: BroadcastMessage) {
            self.published.lock().unwrap().push(message);
        }
    }

    struct FailingRequestRepository;

    #[async_trait]
    impl RequestRepository for FailingRequestRepository {
        async fn save(&self, _request: &ServiceRequest) -> Result<(), DomainError> {
            Err(DomainError::database("Simulated save failure"))
        }

        async fn update(&self, _request: &ServiceRequest) -> Result<(), DomainError> {
            Ok(())
        }

        async fn find_by_id(&self, _id: &RequestId) -> Result<Option<ServiceRequest>, DomainError> {
            Ok(None)
        }

        async fn find_by_restaurant(
            &self,
            _restaurant_id: &RestaurantId,
        ) -> Result<Vec<ServiceRequest>, DomainError> {
            Ok(vec![])
        }

        async fn find_pending_by_restaurant(
            &self,
            _restaurant_id: &RestaurantId,
        ) -> Result<Vec<ServiceRequest>, DomainError> {
            Ok(vec![])
        }

        async fn delete(&self, _id: &RequestId) -> Result<(), DomainError> {
            Ok(())
        }
    }

    struct StalledRequestRepository;

    #[async_trait]
    impl RequestRepository for StalledRequestRepository {
        async fn save(&self, _request: &ServiceRequest) -> Result<(), DomainError> {
            std::future::pending::<()>().await;
            Ok(())
        }

        async fn update(&self, _request: &ServiceRequest) -> Result<(), DomainError> {
            Ok(())
        }

        async fn find_by_id(&self, _id: &RequestId) -> Result<Option<ServiceRequest>, DomainError> {
            Ok(None)
        }

        async fn find_by_restaurant(
            &self,
            _restaurant_id: &RestaurantId,
        ) -> Result<Vec<ServiceRequest>, DomainError> {
            Ok(vec![])
        }

        async fn find_pending_by_restaurant(
            &self,
            _restaurant_id: &RestaurantId,
        ) -> Result<Vec<ServiceRequest>, DomainError> {
            Ok(vec![])
        }

        async fn delete(&self, _id: &RequestId) -> Result<(), DomainError> {
            Ok(())
        }
    }

    struct Fixture {
        branches: Arc<InMemoryBranchRepository>,
        tables: Arc<InMemoryTableRepository>,
        requests: Arc<InMemoryRequestRepository>,
        publisher: Arc<RecordingPublisher>,
        restaurants: Arc<InMemoryRestaurantRepository>,
    }

    impl Fixture {
        fn handler(&self) -> CreateServiceRequestHandler {
            self.handler_with(self.requests.clone())
        }

        fn handler_with(&self, requests: Arc<dyn RequestRepository>) -> CreateServiceRequestHandler {
            CreateServiceRequestHandler::new(
                self.restaurants.clone(),
                self.branches.clone(),
                self.tables.clone(),
                requests,
                self.publisher.clone(),
            )
        }
    }

    async fn fixture() -> Fixture {
        let restaurants = Arc::new(InMemoryRestaurantRepository::new());
        let branches = Arc::new(InMemoryBranchRepository::new());
        let tables = Arc::new(InMemoryTableRepository::new());

        let restaurant = Restaurant::new(
            RestaurantId::new("rest-1").unwrap(),
            UserId::new("owner-1").unwrap(),
            RestaurantDetails {
                name: "La Esquina".to_string(),
                address: "Av. Corrientes 1234".to_string(),
                phone: "11 5555 0000".to_string(),
                description: None,
            },
        )
        .unwrap();
        restaurants.save(&restaurant).await.unwrap();

        let branch = Branch::new(
            BranchId::new("branch-1").unwrap(),
            RestaurantId::new("rest-1").unwrap(),
            "Centro".to_string(),
            None,
        )
        .unwrap();
        branches.save(&branch).await.unwrap();

        let table = Table::new(
            TableId::new("table-9").unwrap(),
            RestaurantId::new("rest-1").unwrap(),
            BranchId::new("branch-1").unwrap(),
            9,
            4,
            "https://tepidolacuenta.com",
        )
        .unwrap();
        tables.save(&table).await.unwrap();

        Fixture {
            branches,
            tables,
            requests: Arc::new(InMemoryRequestRepository::new()),
            publisher: Arc::new(RecordingPublisher::default()),
            restaurants,
        }
    }

    fn command(proof: &str) -> CreateServiceRequestCommand {
        CreateServiceRequestCommand {
            restaurant_id: "rest-1".to_string(),
            branch_id: "branch-1".to_string(),
            table_id: "table-9".to_string(),
            table_number: 9,
            proof: proof.to_string(),
        }
    }

    fn valid_proof() -> String {
        qr_proof::issue("rest-1", "branch-1", "table-9", 9).to_string()
    }

    #[tokio::test]
    async fn valid_proof_creates_and_publishes_once() {
        let f = fixture().await;

        let result = f.handler().handle(command(&valid_proof())).await.unwrap();

        assert!(result.request.is_pending());
        assert_eq!(result.request.table_number(), 9);
        assert_eq!(f.requests.count().await, 1);

        let published = f.publisher.published();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].restaurant_id.as_str(), "rest-1");
        assert_eq!(
            published[0].event,
            NotificationEvent::RequestCreated(result.request)
        );
    }

    #[tokio::test]
    async fn invalid_proof_is_rejected_without_side_effects() {
        let f = fixture().await;

        let result = f.handler().handle(command("wrong")).await;

        assert_eq!(result.unwrap_err(), RequestError::InvalidQrCode);
        assert_eq!(f.requests.count().await, 0);
        assert!(f.publisher.published().is_empty());
    }

    #[tokio::test]
    async fn tampered_table_number_is_rejected() {
        let f = fixture().await;
        let mut cmd = command(&valid_proof());
        cmd.table_number = 10;

        let result = f.handler().handle(cmd).await;

        assert_eq!(result.unwrap_err(), RequestError::InvalidQrCode);
    }

    #[tokio::test]
    async fn non_positive_table_number_fails_validation() {
        let f = fixture().await;
        let mut cmd = command(&qr_proof::issue("rest-1", "branch-1", "table-9", 0).to_string());
        cmd.table_number = 0;

        let result = f.handler().handle(cmd).await;

        assert!(matches!(result, Err(RequestError::ValidationFailed { .. })));
    }

    #[tokio::test]
    async fn unknown_table_with_valid_proof_is_not_found() {
        let f = fixture().await;
        let proof = qr_proof::issue("rest-1", "branch-1", "table-404", 9);
        let mut cmd = command(proof.as_str());
        cmd.table_id = "table-404".to_string();

        let result = f.handler().handle(cmd).await;

        assert!(matches!(result, Err(RequestError::TableNotFound(_))));
        assert!(f.publisher.published().is_empty());
    }

    #[tokio::test]
    async fn number_other_than_the_stored_table_is_not_found() {
        let f = fixture().await;
        let proof = qr_proof::issue("rest-1", "branch-1", "table-9", 42);
        let mut cmd = command(proof.as_str());
        cmd.table_number = 42;

        let result = f.handler().handle(cmd).await;

        assert!(matches!(result, Err(RequestError::TableNotFound(_))));
        assert_eq!(f.requests.count().await, 0);
        assert!(f.publisher.published().is_empty());
    }

    #[tokio::test]
    async fn branch_other_than_the_stored_table_is_not_found() {
        let f = fixture().await;
        let other_branch = Branch::new(
            BranchId::new("branch-2").unwrap(),
            RestaurantId::new("rest-1").unwrap(),
            "Palermo".to_string(),
            None,
        )
        .unwrap();
        f.branches.save(&other_branch).await.unwrap();
        let proof = qr_proof::issue("rest-1", "branch-2", "table-9", 9);
        let mut cmd = command(proof.as_str());
        cmd.branch_id = "branch-2".to_string();

        let result = f.handler().handle(cmd).await;

        assert!(matches!(result, Err(RequestError::TableNotFound(_))));
        assert_eq!(f.requests.count().await, 0);
        assert!(f.publisher.published().is_empty());
    }

    #[tokio::test]
    async fn coordinates_with_shifted_delimiter_fail_validation() {
        let f = fixture().await;
        let proof = qr_proof::issue("rest-1", "branch-1:table-9", "x", 9);
        assert_eq!(proof, qr_proof::issue("rest-1:branch-1", "table-9", "x", 9));
        let cmd = CreateServiceRequestCommand {
            restaurant_id: "rest-1:branch-1".to_string(),
            branch_id: "table-9".to_string(),
            table_id: "x".to_string(),
            table_number: 9,
            proof: proof.to_string(),
        };

        let result = f.handler().handle(cmd).await;

        assert!(matches!(
            result,
            Err(RequestError::ValidationFailed { ref field, .. }) if field == "restaurant_id"
        ));
        assert_eq!(f.requests.count().await, 0);
        assert!(f.publisher.published().is_empty());
    }

    #[tokio::test]
    async fn unknown_restaurant_is_not_found() {
        let f = fixture().await;
        let proof = qr_proof::issue("rest-404", "branch-1", "table-9", 9);
        let mut cmd = command(proof.as_str());
        cmd.restaurant_id = "rest-404".to_string();

        let result = f.handler().handle(cmd).await;

        assert!(matches!(result, Err(RequestError::RestaurantNotFound(_))));
    }

    #[tokio::test]
    async fn inactive_table_is_rejected() {
        let f = fixture().await;
        let mut table = f
            .tables
            .find_by_id(&TableId::new("table-9").unwrap())
            .await
            .unwrap()
            .unwrap();
        table.set_active(false);
        f.tables.save(&table).await.unwrap();

        let result = f.handler().handle(command(&valid_proof())).await;

        assert!(matches!(result, Err(RequestError::TableInactive(_))));
        assert!(f.publisher.published().is_empty());
    }

    #[tokio::test]
    async fn inactive_branch_is_rejected() {
        let f = fixture().await;
        let mut branch = f
            .branches
            .find_by_id(&BranchId::new("branch-1").unwrap())
            .await
            .unwrap()
            .unwrap();
        branch.set_active(false);
        f.branches.save(&branch).await.unwrap();

        let result = f.handler().handle(command(&valid_proof())).await;

        assert!(matches!(result, Err(RequestError::BranchInactive(_))));
    }

    #[tokio::test]
    async fn persistence_failure_publishes_nothing() {
        let f = fixture().await;

        let result = f
            .handler_with(Arc::new(FailingRequestRepository))
            .handle(command(&valid_proof()))
            .await;

        assert!(matches!(result, Err(RequestError::Infrastructure(_))));
        assert!(f.publisher.published().is_empty());
    }

    #[tokio::test]
    async fn stalled_storage_times_out() {
        let f = fixture().await;

        let result = f
            .handler_with(Arc::new(StalledRequestRepository))
            .with_query_timeout(Duration::from_millis(20))
            .handle(command(&valid_proof()))
            .await;

        assert_eq!(result.unwrap_err(), RequestError::Timeout);
        assert!(f.publisher.published().is_empty());
    }
}
