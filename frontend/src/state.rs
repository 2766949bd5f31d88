use std::rc::Rc;

use shared::{Conversation, QueryResponse, UploadFlow, UploadResponse};
use yew::Reducible;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatState(pub Conversation);

pub enum ChatAction {
    Ask(String),
    Answered(Result<QueryResponse, String>),
    DocumentAccepted(String),
}

impl Reducible for ChatState {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut convo = self.0.clone();

        match action {
            ChatAction::Ask(text) => {
                if convo.begin_send(&text).is_none() {
                    return self;
                }
            }
            ChatAction::Answered(outcome) => convo.finish_send(outcome),
            ChatAction::DocumentAccepted(file_name) => convo.on_document_accepted(&file_name),
        }

        Rc::new(Self(convo))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadState(pub UploadFlow);

pub enum UploadAction {
    Accept(String),
    Finished(Result<UploadResponse, String>),
    Reset,
}

impl Reducible for UploadState {
    type Action = UploadAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut flow = self.0.clone();

        match action {
            UploadAction::Accept(file_name) => {
                // Rejections are recorded in the flow's own status.
                let _ = flow.accept_file(&file_name);
            }
            UploadAction::Finished(outcome) => {
                flow.finish(outcome);
            }
            UploadAction::Reset => flow.reset(),
        }

        if flow == self.0 {
            self
        } else {
            Rc::new(Self(flow))
        }
    }
}
