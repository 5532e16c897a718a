use super::create_package::CreatePackageUseCase;
use crate::shared::usecase::Subscriber;
use portarius_domain::{Event, Package, PackageStatus, ReminderChannel};
use portarius_infra::PortariusContext;

/// Announces freshly stored pending packages on the event bus so the
/// reminder listeners can pick them up.
pub struct PublishPackageCreated;

#[async_trait::async_trait(?Send)]
impl Subscriber<CreatePackageUseCase> for PublishPackageCreated {
    async fn notify(&self, package: &Package, ctx: &PortariusContext) {
        if package.status != PackageStatus::Pending {
            return;
        }

        // Sideeffect, completion is the listener's business
        let _ = ctx.bus.publish(
            Event::PackageCreated {
                package_id: package.id.clone(),
                channel: ReminderChannel::WhatsApp,
            },
            ctx,
        );
    }
}
