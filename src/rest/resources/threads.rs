//! Message thread pools.

use crate::rest::ResourcePool;

resource_pool! {
    /// Root pool for `threads`: the shop's message threads with customers
    /// and the operator.
    ThreadsPool: Gettable, Listable
}

impl ThreadsPool {
    /// `threads/{thread_id}/message`: reply on a thread.
    ///
    /// Replies carrying files go through
    /// [`Creatable::create_with_attachments`](crate::rest::Creatable::create_with_attachments).
    #[must_use]
    pub fn message(&self, thread_id: &str) -> ThreadsMessagePool {
        self.child(&[thread_id, "message"])
    }

    /// `threads/{attachment_id}/download`: download a thread attachment.
    #[must_use]
    pub fn attachment(&self, attachment_id: &str) -> ThreadsAttachmentPool {
        self.child(&[attachment_id, "download"])
    }
}

resource_pool! {
    ThreadsMessagePool: Creatable
}

resource_pool! {
    ThreadsAttachmentPool: Gettable
}
