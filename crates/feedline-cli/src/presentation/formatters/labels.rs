use feedline_runtime::ValidationError;
use feedline_types::Locale;

/// Fixed UI strings for one locale
#[derive(Debug)]
pub struct Labels {
    pub app_title: &'static str,
    pub edit_profile: &'static str,
    pub comment_form_title: &'static str,
    pub comment_placeholder: &'static str,
    pub publish: &'static str,
    pub applaud: &'static str,
    pub remove_comment: &'static str,
    pub required: &'static str,
    pub no_posts: &'static str,
    pub published: &'static str,
    pub deleted: &'static str,
    pub comments: &'static str,
}

static PT_BR: Labels = Labels {
    app_title: "Ignite Feed",
    edit_profile: "Editar seu perfil",
    comment_form_title: "Deixe seu feedback",
    comment_placeholder: "Deixe um comentário",
    publish: "Publicar",
    applaud: "Aplaudir",
    remove_comment: "Remover comentário",
    required: "Campo obrigatório!",
    no_posts: "Nenhuma publicação ainda",
    published: "Comentário publicado",
    deleted: "Comentário removido",
    comments: "comentários",
};

static EN: Labels = Labels {
    app_title: "Ignite Feed",
    edit_profile: "Edit your profile",
    comment_form_title: "Leave your feedback",
    comment_placeholder: "Leave a comment",
    publish: "Publish",
    applaud: "Applaud",
    remove_comment: "Delete comment",
    required: "This field is required.",
    no_posts: "No posts yet",
    published: "Comment published",
    deleted: "Comment deleted",
    comments: "comments",
};

pub fn labels(locale: Locale) -> &'static Labels {
    match locale {
        Locale::PtBr => &PT_BR,
        Locale::En => &EN,
    }
}

impl Labels {
    pub fn validation(&self, error: ValidationError) -> &'static str {
        match error {
            ValidationError::Required => self.required,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_message_is_localized() {
        assert_eq!(
            labels(Locale::PtBr).validation(ValidationError::Required),
            "Campo obrigatório!"
        );
        assert_eq!(
            labels(Locale::En).validation(ValidationError::Required),
            "This field is required."
        );
    }
}
