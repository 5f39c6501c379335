// HTML bodies for the templated email endpoints.
// Placeholders use the literal `{{key}}` form understood by `template::render`.

/// Welcome / account credentials email. Placeholders: `company_name`, `to_name`,
/// `user_role`, `user_email`, `user_password`, `website_link`, `from_name`.
pub const WELCOME_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Welcome - Your Account Credentials</title>
</head>
<body style="margin: 0; padding: 20px; font-family: system-ui, -apple-system, sans-serif; background-color: #f5f5f5;">
    <div style="max-width: 600px; margin: 0 auto; background-color: #ffffff; border-radius: 8px; overflow: hidden; box-shadow: 0 2px 10px rgba(0,0,0,0.1);">
        
        <!-- Header -->
        <div style="background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); padding: 30px 40px; text-align: center;">
            <h1 style="color: #ffffff; margin: 0; font-size: 24px; font-weight: 600;">
                Welcome to {{company_name}}!
            </h1>
            <p style="color: #ffffff; margin: 10px 0 0 0; opacity: 0.9; font-size: 16px;">
                Your account has been created successfully
            </p>
        </div>

        <!-- Content -->
        <div style="padding: 40px;">
            <p style="font-size: 16px; color: #333333; margin: 0 0 20px 0; line-height: 1.5;">
                Hi <strong>{{to_name}}</strong>,
            </p>
            
            <p style="font-size: 16px; color: #333333; margin: 0 0 30px 0; line-height: 1.5;">
                Welcome to our platform! Your <strong>{{user_role}}</strong> account has been created and you can now access the system using the credentials below.
            </p>

            <!-- Credentials Box -->
            <div style="background-color: #f8f9fa; border: 2px solid #e9ecef; border-radius: 8px; padding: 25px; margin: 25px 0;">
                <h3 style="color: #495057; margin: 0 0 20px 0; font-size: 18px; font-weight: 600;">
                    🔐 Your Login Credentials
                </h3>
                
                <div style="margin-bottom: 15px;">
                    <strong style="color: #495057; display: inline-block; width: 80px;">Email:</strong>
                    <span style="background-color: #ffffff; padding: 8px 12px; border-radius: 4px; border: 1px solid #dee2e6; font-family: 'Courier New', monospace; font-size: 14px;">{{user_email}}</span>
                </div>
                
                <div style="margin-bottom: 15px;">
                    <strong style="color: #495057; display: inline-block; width: 80px;">Password:</strong>
                    <span style="background-color: #ffffff; padding: 8px 12px; border-radius: 4px; border: 1px solid #dee2e6; font-family: 'Courier New', monospace; font-size: 14px;">{{user_password}}</span>
                </div>
                
                <div>
                    <strong style="color: #495057; display: inline-block; width: 80px;">Role:</strong>
                    <span style="background-color: #e7f3ff; color: #0066cc; padding: 4px 8px; border-radius: 4px; font-size: 12px; text-transform: uppercase; font-weight: 600;">{{user_role}}</span>
                </div>
            </div>

            <!-- Login Button -->
            <div style="text-align: center; margin: 30px 0;">
                <a href="{{website_link}}" 
                   style="display: inline-block; background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: #ffffff; text-decoration: none; padding: 12px 30px; border-radius: 6px; font-weight: 600; font-size: 16px;">
                    Login to Your Account
                </a>
            </div>

            <!-- Security Notice -->
            <div style="background-color: #fff3cd; border: 1px solid #ffeaa7; border-radius: 6px; padding: 15px; margin: 25px 0;">
                <p style="color: #856404; margin: 0; font-size: 14px; line-height: 1.4;">
                    <strong>🔒 Security Notice:</strong> Please change your password after your first login for security purposes. Keep your credentials safe and do not share them with others.
                </p>
            </div>

            <p style="font-size: 16px; color: #333333; margin: 30px 0 20px 0; line-height: 1.5;">
                If you have any questions or need assistance, please don't hesitate to contact our support team.
            </p>

            <p style="font-size: 16px; color: #333333; margin: 0; line-height: 1.5;">
                Best regards,<br>
                <strong>{{from_name}}</strong><br>
                <span style="color: #666666;">{{company_name}} Team</span>
            </p>
        </div>

        <!-- Footer -->
        <div style="background-color: #f8f9fa; padding: 20px 40px; border-top: 1px solid #e9ecef; text-align: center;">
            <p style="color: #6c757d; margin: 0; font-size: 14px;">
                This is an automated message. Please do not reply to this email.
            </p>
            <p style="color: #6c757d; margin: 10px 0 0 0; font-size: 12px;">
                © 2024 {{company_name}}. All rights reserved.
            </p>
        </div>
    </div>
</body>
</html>"#;

/// Campus recruitment exam invitation. Placeholders: `to_name`, `exam_title`,
/// `job_id`, `college`, `exam_link`, `message`.
pub const RECRUITMENT_EXAM_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <style>
        body {
            font-family: Arial, sans-serif;
            background-color: #f5f5f5;
            margin: 0;
            padding: 20px;
        }
    </style>
</head>
<body>
    <div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px; border: 1px solid #ddd; border-radius: 8px; background-color: white;">
        <div style="background-color: #1890ff; color: white; padding: 20px; border-radius: 8px 8px 0 0; text-align: center;">
            <h1 style="margin: 0; font-size: 24px;">Campus Recruitment Exam Invitation</h1>
        </div>
        
        <div style="padding: 20px; background-color: #f8f9fa;">
            <p style="font-size: 16px; margin-bottom: 20px;">Dear <strong>{{to_name}}</strong>,</p>
            
            <p style="font-size: 14px; line-height: 1.6; margin-bottom: 20px;">
                You are invited to participate in the campus recruitment exam for the following position:
            </p>
            
            <div style="background-color: white; padding: 15px; border-radius: 5px; margin-bottom: 20px; border-left: 4px solid #1890ff;">
                <p style="margin: 5px 0;"><strong>Exam Title:</strong> {{exam_title}}</p>
                <p style="margin: 5px 0;"><strong>Job ID:</strong> {{job_id}}</p>
                <p style="margin: 5px 0;"><strong>College:</strong> {{college}}</p>
            </div>
            
            <div style="text-align: center; margin: 30px 0;">
                <a href="{{exam_link}}" style="background-color: #1890ff; color: white; padding: 12px 30px; text-decoration: none; border-radius: 5px; font-size: 16px; font-weight: bold; display: inline-block;">
                    Start Exam
                </a>
            </div>
            
            <div style="background-color: #fff3cd; padding: 15px; border-radius: 5px; margin-bottom: 20px; border-left: 4px solid #ffc107;">
                <h3 style="margin-top: 0; color: #856404;">Important Instructions:</h3>
                <ul style="margin-bottom: 0; color: #856404;">
                    <li>Ensure you have a stable internet connection</li>
                    <li>Complete the exam within the given time limit</li>
                    <li>Do not refresh the page during the exam</li>
                    <li>Do not close the browser tab until submission</li>
                    <li>Contact support if you face any technical issues</li>
                </ul>
            </div>
            
            <div style="border-top: 1px solid #ddd; padding-top: 20px; margin-top: 20px;">
                <p style="font-size: 14px; line-height: 1.6;">{{message}}</p>
            </div>
            
            <div style="text-align: center; margin-top: 30px; padding-top: 20px; border-top: 1px solid #ddd;">
                <p style="font-size: 12px; color: #666;">
                    Best regards,<br>
                    HR Team<br>
                    Campus Recruitment Department
                </p>
            </div>
        </div>
    </div>
</body>
</html>"#;

/// Job offer letter. Placeholders: `job_title`, `company_name`, `to_name`,
/// `salary_amount`, `joining_date`, `work_location`, `reporting_manager`,
/// `additional_benefits`, `offer_valid_until`, `message`, `hr_contact`.
pub const JOB_OFFER_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <style>
        body { font-family: Arial, sans-serif; line-height: 1.6; margin: 40px; }
        .header { background: #f8f9fa; padding: 20px; border-radius: 8px; margin-bottom: 30px; }
        .content { background: white; padding: 30px; border: 1px solid #dee2e6; border-radius: 8px; }
        .footer { margin-top: 30px; padding: 20px; background: #f8f9fa; border-radius: 8px; font-size: 14px; }
        .highlight { background: #e7f3ff; padding: 15px; border-radius: 6px; margin: 20px 0; }
        .signature { margin-top: 30px; border-top: 1px solid #dee2e6; padding-top: 20px; }
        table { width: 100%; border-collapse: collapse; margin: 20px 0; }
        td { padding: 10px; border-bottom: 1px solid #eee; }
        .label { font-weight: bold; width: 150px; }
    </style>
</head>
<body>
    <div class="content">
        <div class="highlight">
            <strong>Subject Line:</strong> Job Offer - {{job_title}} Position at {{company_name}}
        </div>
        <div class="template-preview">
            <h3>🎉 Congratulations! Job Offer Letter</h3>
            
            <p>Dear <strong>{{to_name}}</strong>,</p>
            
            <p>We are delighted to extend an offer of employment to you for the position of <strong>{{job_title}}</strong> at <strong>{{company_name}}</strong>.</p>
            
            <p>After careful consideration of your qualifications, experience, and interview performance, we believe you would be a valuable addition to our team.</p>
            
            <h4>📋 Offer Details:</h4>
            <ul>
                <li><strong>Position:</strong> {{job_title}}</li>
                <li><strong>Company:</strong> {{company_name}}</li>
                <li><strong>Compensation:</strong> {{salary_amount}}</li>
                <li><strong>Expected Joining Date:</strong> {{joining_date}}</li>
                <li><strong>Work Location:</strong> {{work_location}}</li>
                <li><strong>Reporting Manager:</strong> {{reporting_manager}}</li>
            </ul>
            
            <h4>🎁 Additional Benefits:</h4>
            <p>{{additional_benefits}}</p>
            
            <h4>⏰ Important Information:</h4>
            <p>This offer is valid until: <strong>{{offer_valid_until}}</strong></p>
            <p>Please confirm your acceptance by replying to this email or contacting our HR team.</p>
            
            <h4>💬 Personal Message:</h4>
            <p>{{message}}</p>
            
            <p>We look forward to welcoming you to our team and are excited about the contributions you will make to our organization.</p>
            
            <p><strong>Next Steps:</strong></p>
            <ol>
                <li>Review this offer carefully</li>
                <li>Contact us if you have any questions</li>
                <li>Confirm your acceptance</li>
                <li>Prepare for your exciting journey with us!</li>
            </ol>
            
            <p>If you have any questions or need clarification about any aspect of this offer, please don't hesitate to reach out.</p>
            
            <p><strong>HR Contact:</strong><br>
            {{hr_contact}}</p>
            
            <p>Congratulations once again, and we look forward to having you on board!</p>
            
            <p>Best regards,<br>
            <strong>{{company_name}} HR Team</strong></p>
            
            <hr>
            <p style="font-size: 12px; color: #666;">
                This is an official job offer from {{company_name}}. Please keep this email for your records.
            </p>
        </div>
    </div>
</body>
</html>"#;

/// Minimal interview invitation. Placeholders: `message_body`.
pub const INTERVIEW_INVITATION_TEMPLATE: &str = r#"<html>
<body>
    <h3>Interview Invitation</h3>
    <p>{{message_body}}</p>
    <br>
</body>
</html>"#;

/// Payslip notification; the payslip PDF travels as an attachment.
/// Placeholders: `company_name`, `employee_name`, `pay_period`,
/// `generated_date`, `year`.
pub const PAYSLIP_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Payslip - {{pay_period}}</title>
    <style>
        body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; margin: 0; padding: 0; background-color: #f4f4f4; }
        .email-container { max-width: 600px; margin: 20px auto; background: white; border-radius: 10px; overflow: hidden; box-shadow: 0 0 20px rgba(0,0,0,0.1); }
        .header { background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 30px 20px; text-align: center; }
        .header h1 { margin: 0; font-size: 24px; }
        .content { padding: 30px 20px; }
        .greeting { font-size: 18px; margin-bottom: 20px; color: #2c3e50; }
        .info-box { background: #f8f9fa; border-left: 4px solid #667eea; padding: 15px; margin: 20px 0; border-radius: 5px; }
        .attachment-note { background: #e8f5e8; border: 1px solid #4caf50; border-radius: 5px; padding: 15px; margin: 20px 0; text-align: center; }
        .attachment-icon { font-size: 24px; color: #4caf50; margin-bottom: 10px; }
        .footer { background: #2c3e50; color: white; text-align: center; padding: 20px; font-size: 14px; }
    </style>
</head>
<body>
    <div class="email-container">
        <div class="header">
            <h1>💼 Payslip Notification</h1>
            <p style="margin: 5px 0 0 0; opacity: 0.9;">{{company_name}}</p>
        </div>

        <div class="content">
            <div class="greeting">Dear {{employee_name}},</div>

            <p>We hope this email finds you well. Your payslip for <strong>{{pay_period}}</strong> is now ready and attached to this email.</p>

            <div class="info-box">
                <strong>📋 Payslip Details:</strong><br>
                <strong>Employee:</strong> {{employee_name}}<br>
                <strong>Pay Period:</strong> {{pay_period}}<br>
                <strong>Generated Date:</strong> {{generated_date}}
            </div>

            <div class="attachment-note">
                <div class="attachment-icon">📎</div>
                <strong>Your payslip is attached as a PDF file</strong><br>
                <small>Please download and save this document for your records</small>
            </div>

            <p>If you have any questions regarding your payslip or notice any discrepancies, please contact the HR department.</p>

            <p style="margin-top: 30px;">
                Best regards,<br>
                <strong>HR Department</strong><br>
                {{company_name}}
            </p>
        </div>

        <div class="footer">
            <p style="margin: 0;">This is an automated email. Please do not reply to this message.</p>
            <p style="margin: 5px 0 0 0; opacity: 0.8;">© {{year}} {{company_name}}. All rights reserved.</p>
        </div>
    </div>
</body>
</html>"#;
